//! Core pieces: RNG, dice, markers, and players.

pub mod dice;
pub mod marker;
pub mod player;
pub mod rng;

pub use dice::{Die, DieColor};
pub use marker::{AdvancePolicy, Marker, START_POSITION};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
