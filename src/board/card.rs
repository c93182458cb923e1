//! Playing cards.
//!
//! A card is a suit and a value 0..=13, where value 0 is the joker
//! (and only the joker has no suit). Values 1, 11, 12, 13 are ace,
//! jack, queen, king.

use serde::{Deserialize, Serialize};

/// Card values unsuitable for the board's edge positions: joker, ace,
/// and the face cards.
pub const RESTRICTED_VALUES: [u8; 5] = [0, 1, 11, 12, 13];

/// A suit symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suit(pub char);

impl Suit {
    /// The standard four suits: clubs, spades, hearts, diamonds.
    pub const STANDARD: [Suit; 4] = [Suit('\u{2663}'), Suit('\u{2660}'), Suit('\u{2665}'), Suit('\u{2666}')];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card.
///
/// Invariant: the suit is absent iff the value is 0 (the joker).
/// Constructors enforce this; there is no other way to build a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    suit: Option<Suit>,
    value: u8,
}

impl Card {
    /// Create an ordinary (non-joker) card.
    ///
    /// Panics if `value` is 0; use [`Card::joker`] for jokers.
    #[must_use]
    pub fn new(suit: Suit, value: u8) -> Self {
        assert!(value != 0, "value 0 is the joker; use Card::joker()");
        Self {
            suit: Some(suit),
            value,
        }
    }

    /// Create a joker (value 0, no suit).
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: None,
            value: 0,
        }
    }

    /// Card with the given value and a placeholder spade suit
    /// (0 builds a joker). Handy for synthetic scenario boards.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        if value == 0 {
            Self::joker()
        } else {
            Self::new(Suit('\u{2660}'), value)
        }
    }

    /// The card's value (0 for jokers).
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The card's suit, absent for jokers.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Is this the joker?
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.value == 0
    }

    /// Is this card barred from the board's edge positions?
    /// (joker, ace, or face card)
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        RESTRICTED_VALUES.contains(&self.value)
    }

    /// Three-character display label: `Jkr` for jokers, suit plus a
    /// zero-padded value for 2..=9, suit plus a face code otherwise
    /// (`Ac`, `10`, `Ja`, `Qu`, `Ki`).
    #[must_use]
    pub fn display(&self) -> String {
        let Some(suit) = self.suit else {
            return "Jkr".to_string();
        };
        match self.value {
            1 => format!("{suit}Ac"),
            10 => format!("{suit}10"),
            11 => format!("{suit}Ja"),
            12 => format!("{suit}Qu"),
            13 => format!("{suit}Ki"),
            v if v <= 9 => format!("{suit}0{v}"),
            v => format!("{suit}{v}"),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joker_has_no_suit() {
        let joker = Card::joker();
        assert!(joker.is_joker());
        assert_eq!(joker.value(), 0);
        assert_eq!(joker.suit(), None);
    }

    #[test]
    fn test_ordinary_card_has_suit() {
        let card = Card::new(Suit('\u{2665}'), 7);
        assert!(!card.is_joker());
        assert_eq!(card.value(), 7);
        assert_eq!(card.suit(), Some(Suit('\u{2665}')));
    }

    #[test]
    #[should_panic(expected = "value 0 is the joker")]
    fn test_zero_value_rejected() {
        Card::new(Suit('\u{2660}'), 0);
    }

    #[test]
    fn test_display_labels() {
        let hearts = Suit('\u{2665}');
        assert_eq!(Card::joker().display(), "Jkr");
        assert_eq!(Card::new(hearts, 1).display(), "\u{2665}Ac");
        assert_eq!(Card::new(hearts, 5).display(), "\u{2665}05");
        assert_eq!(Card::new(hearts, 9).display(), "\u{2665}09");
        assert_eq!(Card::new(hearts, 10).display(), "\u{2665}10");
        assert_eq!(Card::new(hearts, 11).display(), "\u{2665}Ja");
        assert_eq!(Card::new(hearts, 12).display(), "\u{2665}Qu");
        assert_eq!(Card::new(hearts, 13).display(), "\u{2665}Ki");
    }

    #[test]
    fn test_restricted_values() {
        for v in RESTRICTED_VALUES {
            assert!(Card::from_value(v).is_restricted(), "value {v}");
        }
        for v in 2..=10 {
            assert!(!Card::from_value(v).is_restricted(), "value {v}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Card::new(Suit('\u{2663}'), 12);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
