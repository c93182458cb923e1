//! Marker-choice providers.
//!
//! The engine never reads input itself. When a move needs a marker, it
//! hands the turn context to a [`MarkerChoice`] implementation and
//! blocks on the answer — a console prompt in the binary, a scripted
//! queue in tests. The engine validates the returned index; an
//! out-of-range index is surfaced as
//! [`GameError::InvalidSelection`](crate::error::GameError::InvalidSelection),
//! never clamped.

use std::collections::VecDeque;

use crate::core::dice::DieColor;

/// Everything a provider may want to know when picking a marker.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// Acting player's name.
    pub player_name: &'a str,
    /// Die whose move is being assigned.
    pub die: DieColor,
    /// The red die's value this turn.
    pub red_value: u8,
    /// The black die's value this turn.
    pub black_value: u8,
    /// The turn's stop value (red + black).
    pub stop_value: u16,
}

/// Supplies a marker index in `[0, 2]` for each die's move.
pub trait MarkerChoice {
    /// Pick which of the acting player's markers moves.
    fn choose_marker(&mut self, ctx: &TurnContext<'_>) -> usize;
}

/// Scripted provider for tests and bots: answers from a fixed queue.
///
/// A cycling script repeats forever; a plain script falls back to
/// marker 0 once exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoice {
    script: VecDeque<usize>,
    cycle: bool,
}

impl ScriptedChoice {
    /// Answer with the given choices in order, then marker 0.
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: choices.into_iter().collect(),
            cycle: false,
        }
    }

    /// Answer with the given choices in order, repeating forever.
    pub fn cycling(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: choices.into_iter().collect(),
            cycle: true,
        }
    }
}

impl MarkerChoice for ScriptedChoice {
    fn choose_marker(&mut self, _ctx: &TurnContext<'_>) -> usize {
        match self.script.pop_front() {
            Some(choice) => {
                if self.cycle {
                    self.script.push_back(choice);
                }
                choice
            }
            None => 0,
        }
    }
}
