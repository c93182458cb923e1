//! Read-only board renderer.
//!
//! Produces a human-readable grid of card labels with one marker
//! occupancy row per player beneath each card row. Consumes only
//! [`Card::display`](crate::board::Card::display) and
//! [`Player::occupancy_at`](crate::core::Player::occupancy_at); never
//! mutates core state and never touches a console — callers decide
//! where the string goes.

use std::fmt::Write;

use crate::board::Board;
use crate::core::marker::START_POSITION;
use crate::core::player::Player;

/// Cards per rendered row.
const CARDS_PER_ROW: usize = 9;

/// Render the board and every player's marker occupancy as a grid.
///
/// The first block shows the shared off-board start cell; each
/// following block is a row of up to nine `[card]` labels with one
/// occupancy line per player underneath.
#[must_use]
pub fn board_to_string(board: &Board, players: &[Player]) -> String {
    let mut out = String::new();

    // Off-board start cell.
    out.push_str("\tStart\n");
    for player in players {
        let _ = writeln!(out, "{}\t {} ", player.name(), player.occupancy_at(START_POSITION));
    }
    out.push('\n');

    for (row, chunk) in board.cards().chunks(CARDS_PER_ROW).enumerate() {
        let base = row * CARDS_PER_ROW;

        out.push('\t');
        for card in chunk {
            let _ = write!(out, "[{}]\t", card.display());
        }
        out.push('\n');

        for player in players {
            let _ = write!(out, "{}\t", player.name());
            for offset in 0..chunk.len() {
                let position = (base + offset) as i32;
                let _ = write!(out, " {} \t", player.occupancy_at(position));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    out
}
