//! Turn orchestration: choice providers, the turn state machine, and
//! the game engine.

pub mod choice;
pub mod engine;
pub mod turn;

pub use choice::{MarkerChoice, ScriptedChoice, TurnContext};
pub use engine::{Game, GameConfig, RoundOutcome};
pub use turn::{MoveRecord, TurnPhase, TurnRecord};
