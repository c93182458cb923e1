//! Stop-value advancement: scenario and property tests.

use finish_line::{AdvancePolicy, Board, Card, Marker};
use proptest::prelude::*;

/// Board from raw values (0 = joker).
fn board_from_values(values: &[u8]) -> Board {
    Board::from_cards(values.iter().copied().map(Card::from_value).collect())
}

/// Walk a fresh marker to `position` one cell at a time. A stop value
/// above any card value (14) means no card ever halts the walk.
fn marker_at(position: i32, board: &Board) -> Marker {
    let mut marker = Marker::new("1", AdvancePolicy::StopValue);
    for _ in 0..=position {
        marker.advance(1, 14, board);
    }
    assert_eq!(marker.position(), position);
    marker
}

/// Length 10, stop value 5, values at 3..=7 are [2,2,6,1,1]: a marker
/// at position 2 advancing 4 steps through 3 (2<5), 4 (2<5), then
/// stops on 5 (6>=5).
#[test]
fn test_scenario_stops_at_first_qualifying_card() {
    let board = board_from_values(&[5, 5, 5, 2, 2, 6, 1, 1, 5, 5]);
    let mut marker = marker_at(2, &board);

    marker.advance(4, 5, &board);
    assert_eq!(marker.position(), 5);
}

/// Same board, advance 2: steps check positions 3 and 4 only, both
/// value 2 < 5, so the full move applies.
#[test]
fn test_scenario_full_move_without_stop() {
    let board = board_from_values(&[5, 5, 5, 2, 2, 6, 1, 1, 5, 5]);
    let mut marker = marker_at(2, &board);

    marker.advance(2, 5, &board);
    assert_eq!(marker.position(), 4);
}

/// A marker at the second-to-last cell advancing 5: the second
/// candidate step already exceeds the board, so the whole move is
/// forfeited.
#[test]
fn test_scenario_overrun_is_a_no_op() {
    let board = board_from_values(&[5, 5, 5, 2, 2, 6, 1, 1, 5, 5]);
    let mut marker = marker_at(8, &board);

    marker.advance(5, 5, &board);
    assert_eq!(marker.position(), 8);
}

/// First qualifying card at start+k halts any move of k or more
/// spaces exactly at start+k.
#[test]
fn test_termination_rule() {
    // First card with value >= 7 sits 3 cells ahead of position 1.
    let board = board_from_values(&[2, 3, 3, 3, 9, 2, 2, 9, 2, 2]);
    for spaces in 3..=8 {
        let mut marker = marker_at(1, &board);
        marker.advance(spaces, 7, &board);
        assert_eq!(marker.position(), 4, "spaces = {spaces}");
    }
}

#[test]
fn test_below_k_spaces_does_not_reach_the_stop() {
    let board = board_from_values(&[2, 3, 3, 3, 9, 2, 2, 9, 2, 2]);
    let mut marker = marker_at(1, &board);

    marker.advance(2, 7, &board);
    assert_eq!(marker.position(), 3);
}

proptest! {
    /// start <= result <= start + spaces, for any board and move.
    #[test]
    fn prop_advancement_is_monotone(
        values in prop::collection::vec(0u8..=13, 8..40),
        start_steps in 0usize..40,
        spaces in 0u8..=12,
        stop_value in 2u16..=12,
    ) {
        let board = board_from_values(&values);
        let start_steps = start_steps.min(board.len() - 1) as i32;

        let mut marker = marker_at(start_steps, &board);
        let start = marker.position();
        marker.advance(spaces, stop_value, &board);

        prop_assert!(marker.position() >= start);
        prop_assert!(marker.position() <= start + i32::from(spaces));
    }

    /// A marker never advances past the final cell.
    #[test]
    fn prop_marker_stays_on_board(
        values in prop::collection::vec(0u8..=13, 8..40),
        moves in prop::collection::vec((1u8..=6, 2u16..=12), 1..60),
    ) {
        let board = board_from_values(&values);
        let mut marker = Marker::new("1", AdvancePolicy::StopValue);

        for (spaces, stop_value) in moves {
            marker.advance(spaces, stop_value, &board);
            prop_assert!(marker.position() <= board.finish_position());
            prop_assert!(marker.position() >= -1);
        }
    }
}
