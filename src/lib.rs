//! # finish-line
//!
//! A deterministic, turn-based race engine played on a shuffled deck of
//! cards laid out as a linear board.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness (shuffle, validation swaps, die
//!    rolls) flows through one seeded [`GameRng`] owned by the game.
//!    Same seed + same choices = same game.
//!
//! 2. **Core Does No I/O**: Marker selection is a trait the caller
//!    implements ([`MarkerChoice`]); rendering is a pure string
//!    producer. The interactive console lives in the binary.
//!
//! 3. **Configuration Over Convention**: Suit set, value set, joker
//!    count, die sides, and player roster are all [`GameConfig`]
//!    inputs, fixed at game start.
//!
//! ## Rules Summary
//!
//! Each turn the acting player rolls a red and a black die. Their sum
//! is the turn's *stop value*. Each die moves one marker: the marker
//! walks forward one cell at a time, and if it lands on a card whose
//! value meets or exceeds the stop value, it halts there. A move that
//! would walk off the end of the board is forfeited entirely. First
//! player with all three markers on the final card wins.
//!
//! ## Modules
//!
//! - `core`: RNG, dice, markers, players
//! - `board`: cards, the board (deck), shuffle and edge validation
//! - `game`: choice provider, turn state machine, game engine
//! - `render`: read-only board/occupancy renderer
//! - `error`: error taxonomy

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use crate::core::{AdvancePolicy, Die, DieColor, GameRng, Marker, Player, PlayerId, START_POSITION};

pub use crate::board::{Board, Card, Suit, RESTRICTED_VALUES};

pub use crate::game::{
    Game, GameConfig, MarkerChoice, MoveRecord, RoundOutcome, ScriptedChoice, TurnContext,
    TurnPhase, TurnRecord,
};

pub use crate::error::GameError;
