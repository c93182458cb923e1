//! Dice. Two exist per game: one red, one black.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::error::GameError;

/// Which of the game's two dice a value or move belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieColor {
    Red,
    Black,
}

impl std::fmt::Display for DieColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieColor::Red => write!(f, "Red"),
            DieColor::Black => write!(f, "Black"),
        }
    }
}

/// A die with a fixed side count and the value of its latest roll.
///
/// The value is regenerated every turn; it starts at 1 so a die is
/// never observed in an unrolled, zero state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
    color: DieColor,
    value: u8,
}

impl Die {
    /// Create a die with the given side count.
    pub fn new(sides: u8, color: DieColor) -> Result<Self, GameError> {
        if sides < 1 {
            return Err(GameError::InvalidDieSides(sides));
        }
        Ok(Self {
            sides,
            color,
            value: 1,
        })
    }

    /// A standard six-sided die.
    #[must_use]
    pub fn standard(color: DieColor) -> Self {
        Self {
            sides: 6,
            color,
            value: 1,
        }
    }

    /// Roll the die: uniform in `[1, sides]`, stored and returned.
    pub fn roll(&mut self, rng: &mut GameRng) -> u8 {
        self.value = rng.gen_range_u8(1..=self.sides);
        self.value
    }

    /// The value of the latest roll.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The die's side count.
    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// The die's color.
    #[must_use]
    pub fn color(&self) -> DieColor {
        self.color
    }
}
