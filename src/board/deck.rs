//! The board: an ordered deck of cards functioning as race track cells.
//!
//! Construction is deterministic (suit-major, value-minor, jokers
//! last). Randomness enters through [`Board::shuffle`] and the interior
//! draws of [`Board::validate`], both fed by an explicit [`GameRng`].
//!
//! The board's length is fixed at construction; shuffle and validation
//! only reorder the cards.

use serde::{Deserialize, Serialize};

use crate::board::card::{Card, Suit};
use crate::core::rng::GameRng;
use crate::error::GameError;

/// Number of jokers in the standard composition.
pub const STANDARD_JOKER_COUNT: usize = 2;

/// The ordered sequence of cards the markers race across.
///
/// Position is the zero-based index into the sequence; position −1 is
/// the shared off-board start cell (see
/// [`START_POSITION`](crate::core::START_POSITION)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a board: `suits × values` ordinary cards in suit-major,
    /// value-minor order, followed by `joker_count` jokers.
    #[must_use]
    pub fn build(suits: &[Suit], values: &[u8], joker_count: usize) -> Self {
        let mut cards = Vec::with_capacity(suits.len() * values.len() + joker_count);
        for &suit in suits {
            for &value in values {
                cards.push(Card::new(suit, value));
            }
        }
        for _ in 0..joker_count {
            cards.push(Card::joker());
        }
        Self { cards }
    }

    /// The standard 54-card board: four suits, values 1..=13, two
    /// jokers.
    #[must_use]
    pub fn standard() -> Self {
        let values: Vec<u8> = (1..=13).collect();
        Self::build(&Suit::STANDARD, &values, STANDARD_JOKER_COUNT)
    }

    /// Build a board from an explicit card sequence. Used by scenario
    /// tests and collaborators that supply their own layouts.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at a position, if in range.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Index of the final cell — the finish line.
    #[must_use]
    pub fn finish_position(&self) -> i32 {
        self.cards.len() as i32 - 1
    }

    /// The six edge positions pinned by validation: the first three
    /// and last three cells. Meaningful only for boards of at least
    /// 7 cells; [`Board::validate`] rejects shorter boards.
    #[must_use]
    pub fn edge_positions(&self) -> [usize; 6] {
        let n = self.cards.len();
        [0, 1, 2, n - 3, n - 2, n - 1]
    }

    /// Unbiased in-place Fisher–Yates shuffle: walk from the last
    /// index down to 1, swapping each with a uniform index at or
    /// below it.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for index in (1..self.cards.len()).rev() {
            let other = rng.gen_range_usize(0..index + 1);
            self.cards.swap(index, other);
        }
    }

    /// Enforce the edge rule: the first three and last three cells
    /// never hold a restricted card (joker, ace, or face card).
    ///
    /// Each offending edge card is swapped with a uniformly drawn
    /// interior cell (positions `3..=len−4`) holding a non-restricted
    /// card, rejection-sampling until one is hit. Fails with
    /// [`GameError::UnsatisfiableValidation`] when the interior has no
    /// non-restricted card left to offer (including boards shorter
    /// than 7 cells, whose interior is empty).
    ///
    /// Must run to completion before any turn is played; card order is
    /// the only thing mutated.
    pub fn validate(&mut self, rng: &mut GameRng) -> Result<(), GameError> {
        if self.cards.len() < 7 {
            return Err(GameError::UnsatisfiableValidation);
        }
        for position in self.edge_positions() {
            self.validate_position(position, rng)?;
        }
        Ok(())
    }

    /// Fix a single edge position, if its card is restricted.
    fn validate_position(&mut self, position: usize, rng: &mut GameRng) -> Result<(), GameError> {
        if !self.cards[position].is_restricted() {
            return Ok(());
        }

        // Every swap moves a restricted card into the interior, so the
        // supply of non-restricted interior cards shrinks as edges are
        // fixed; re-check before sampling or the draw loop could spin
        // forever.
        let interior = 3..self.cards.len() - 3;
        if !self.cards[interior.clone()].iter().any(|c| !c.is_restricted()) {
            return Err(GameError::UnsatisfiableValidation);
        }

        loop {
            let candidate = rng.gen_range_usize(interior.clone());
            if !self.cards[candidate].is_restricted() {
                self.cards.swap(position, candidate);
                return Ok(());
            }
        }
    }
}
