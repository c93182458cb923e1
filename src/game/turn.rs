//! The turn state machine and per-turn records.
//!
//! A turn walks a fixed phase sequence. Both dice are rolled before
//! either move because the stop value — shared by both moves — is
//! their sum:
//!
//! ```text
//! AwaitingRedRoll -> AwaitingBlackRoll -> AwaitingRedMarkerChoice
//!   -> RedMoveApplied -> AwaitingBlackMarkerChoice -> BlackMoveApplied
//!   -> TurnComplete
//! ```
//!
//! The only suspension points are the two marker choices, where the
//! engine blocks on the [`MarkerChoice`](crate::game::MarkerChoice)
//! provider.

use serde::{Deserialize, Serialize};

use crate::core::dice::DieColor;
use crate::core::player::PlayerId;

/// Phase of the turn currently in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting to roll the red die.
    #[default]
    AwaitingRedRoll,
    /// Red rolled; waiting to roll the black die.
    AwaitingBlackRoll,
    /// Both dice rolled; waiting for the red move's marker choice.
    AwaitingRedMarkerChoice,
    /// The red die's move has been applied.
    RedMoveApplied,
    /// Waiting for the black move's marker choice.
    AwaitingBlackMarkerChoice,
    /// The black die's move has been applied.
    BlackMoveApplied,
    /// The turn is over.
    TurnComplete,
}

impl TurnPhase {
    /// The phase that follows this one. `TurnComplete` is terminal
    /// and maps to itself.
    #[must_use]
    pub fn next(self) -> TurnPhase {
        match self {
            TurnPhase::AwaitingRedRoll => TurnPhase::AwaitingBlackRoll,
            TurnPhase::AwaitingBlackRoll => TurnPhase::AwaitingRedMarkerChoice,
            TurnPhase::AwaitingRedMarkerChoice => TurnPhase::RedMoveApplied,
            TurnPhase::RedMoveApplied => TurnPhase::AwaitingBlackMarkerChoice,
            TurnPhase::AwaitingBlackMarkerChoice => TurnPhase::BlackMoveApplied,
            TurnPhase::BlackMoveApplied => TurnPhase::TurnComplete,
            TurnPhase::TurnComplete => TurnPhase::TurnComplete,
        }
    }

    /// Is the turn over?
    #[must_use]
    pub fn is_complete(self) -> bool {
        self == TurnPhase::TurnComplete
    }
}

/// One die's applied move within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Die the move belongs to.
    pub die: DieColor,
    /// Index of the marker that moved.
    pub marker: usize,
    /// Marker position before the move.
    pub from: i32,
    /// Marker position after the move (equals `from` when the move
    /// was forfeited by an overrun).
    pub to: i32,
}

/// A completed turn: dice, stop value, and both applied moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The acting player.
    pub player: PlayerId,
    /// The red die's value.
    pub red_value: u8,
    /// The black die's value.
    pub black_value: u8,
    /// The turn's stop value (red + black, 2..=12 on standard dice).
    /// Widened past the die value type so large-sided dice sum
    /// without overflow.
    pub stop_value: u16,
    /// The red move followed by the black move.
    pub moves: [MoveRecord; 2],
}
