//! Error taxonomy for game construction and play.
//!
//! Configuration errors fail fast at construction. Provider errors
//! (out-of-range marker selection) surface immediately; the core never
//! clamps or retries them. Walking off the end of the board during
//! advancement is *not* an error — it is a defined no-op.

use crate::core::DieColor;

/// Errors produced by game construction, board validation, and play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A game needs at least one player.
    #[error("game requires at least one player")]
    NoPlayers,

    /// Players carry exactly three markers.
    #[error("expected exactly 3 marker names, got {0}")]
    MarkerNameCount(usize),

    /// A die needs at least one side.
    #[error("die must have at least 1 side, got {0}")]
    InvalidDieSides(u8),

    /// Board composition produced no cards.
    #[error("board composition requires at least one suit and one value")]
    EmptyComposition,

    /// A configured card value falls outside 1..=13.
    #[error("card value {0} is outside 1..=13 (0 is reserved for jokers)")]
    InvalidCardValue(u8),

    /// The choice provider selected a marker that does not exist.
    #[error("marker selection {index} out of range for {die} die (player has {count} markers)")]
    InvalidSelection {
        /// Index the provider returned.
        index: usize,
        /// Number of markers the acting player owns.
        count: usize,
        /// Die whose move was being assigned.
        die: DieColor,
    },

    /// Edge validation cannot complete: the board interior holds no
    /// non-restricted card to swap in.
    #[error("board interior has no non-restricted card to swap into an edge position")]
    UnsatisfiableValidation,
}
