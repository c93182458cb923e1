//! The board: cards and the ordered deck they race across.

pub mod card;
pub mod deck;

pub use card::{Card, Suit, RESTRICTED_VALUES};
pub use deck::Board;
