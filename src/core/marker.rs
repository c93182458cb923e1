//! Markers - the player-owned tokens whose board positions are the
//! race state.
//!
//! A marker advances under one of two policies, selected at
//! construction:
//!
//! - [`AdvancePolicy::Offset`]: move the full distance, unconditionally.
//! - [`AdvancePolicy::StopValue`]: walk the board one cell at a time
//!   and halt early on the first card whose value meets or exceeds the
//!   turn's stop value. A walk that would step past the end of the
//!   board forfeits the entire move.
//!
//! Race markers always use the stop-value policy; the raw offset policy
//! exists for board-agnostic tokens.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Shared off-board start cell. All markers begin here; the first
/// step of the first move examines board position 0.
pub const START_POSITION: i32 = -1;

/// How a marker interprets an advancement request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvancePolicy {
    /// Apply the requested distance as a raw offset.
    Offset,
    /// Walk cell by cell, stopping early on a card whose value meets
    /// the stop value; overrunning the board forfeits the move.
    #[default]
    StopValue,
}

/// A named token at a board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    name: String,
    position: i32,
    policy: AdvancePolicy,
}

impl Marker {
    /// Create a marker at the off-board start position.
    pub fn new(name: impl Into<String>, policy: AdvancePolicy) -> Self {
        Self {
            name: name.into(),
            position: START_POSITION,
            policy,
        }
    }

    /// The marker's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The marker's current board position (−1 = off-board start).
    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// The marker's advancement policy.
    #[must_use]
    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// Advance up to `spaces` cells forward.
    ///
    /// Under [`AdvancePolicy::StopValue`], each candidate step is
    /// checked in increasing order:
    ///
    /// - stepping at or past the board's end aborts the whole move
    ///   (the marker does not move at all this call);
    /// - landing on a card with value `>= stop_value` stops the marker
    ///   exactly there.
    ///
    /// If no step stopped the marker, it moves the full distance.
    pub fn advance(&mut self, spaces: u8, stop_value: u16, board: &Board) {
        match self.policy {
            AdvancePolicy::Offset => self.position += i32::from(spaces),
            AdvancePolicy::StopValue => {
                for counter in 1..=i32::from(spaces) {
                    let target = self.position + counter;
                    if target >= board.len() as i32 {
                        return;
                    }
                    if u16::from(board.cards()[target as usize].value()) >= stop_value {
                        self.position += counter;
                        return;
                    }
                }
                self.position += i32::from(spaces);
            }
        }
    }
}
