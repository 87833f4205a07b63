use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while constructing or parsing cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardError {
    #[error("card id {0} is outside 1..=52")]
    IdOutOfRange(u8),

    #[error("unrecognized card value character '{0}'")]
    UnknownValueChar(char),

    #[error("unrecognized suit character '{0}'")]
    UnknownSuitChar(char),

    #[error("card notation must be exactly two characters")]
    BadNotationLength,
}

/// Card value, two through ace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

const VALUE_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

impl Value {
    /// Lookup by zero-based index, two through ace.
    pub fn from_index(index: u8) -> Option<Value> {
        VALUES.get(index as usize).copied()
    }

    /// The character used in two-character card notation.
    pub fn to_char(self) -> char {
        VALUE_CHARS[self as usize]
    }

    fn from_char(c: char) -> Option<Value> {
        VALUE_CHARS
            .iter()
            .position(|&vc| vc == c.to_ascii_uppercase())
            .map(|i| VALUES[i])
    }
}

/// Card suit. The discriminant is the card id modulo four.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    Spade = 0,
    Club = 1,
    Diamond = 2,
    Heart = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

impl Suit {
    pub fn from_index(index: u8) -> Option<Suit> {
        SUITS.get(index as usize).copied()
    }

    /// The lowercase character used in two-character card notation.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            _ => None,
        }
    }

    /// The suit code used when composing a card id (`id = 4 * value + code`).
    fn notation_code(self) -> u8 {
        match self {
            Suit::Club => 1,
            Suit::Diamond => 2,
            Suit::Heart => 3,
            Suit::Spade => 4,
        }
    }
}

/// A single card identified by an integer in `1..=52`.
///
/// The id encodes value and suit: `value = (id - 1) / 4` and
/// `suit = id % 4`. The two of clubs is card 1, the ace of spades is
/// card 52. This is the identity the rank table is keyed on, so the
/// codec here must never change independently of the table resource.
///
/// # Examples
/// ```
/// use uth_sim::core::{Card, Suit, Value};
///
/// let ace = "As".parse::<Card>().unwrap();
/// assert_eq!(ace.id(), 52);
/// assert_eq!(ace.value(), Value::Ace);
/// assert_eq!(ace.suit(), Suit::Spade);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card(u8);

impl Card {
    pub const MIN_ID: u8 = 1;
    pub const MAX_ID: u8 = 52;

    /// Create a card from its table id, validating the range.
    pub fn new(id: u8) -> Result<Card, CardError> {
        if (Card::MIN_ID..=Card::MAX_ID).contains(&id) {
            Ok(Card(id))
        } else {
            Err(CardError::IdOutOfRange(id))
        }
    }

    /// Compose a card from value and suit.
    pub fn from_parts(value: Value, suit: Suit) -> Card {
        Card(4 * value as u8 + suit.notation_code())
    }

    /// The integer identity in `1..=52`.
    pub fn id(self) -> u8 {
        self.0
    }

    /// Zero-based value index, two = 0 through ace = 12.
    pub fn value_index(self) -> u8 {
        (self.0 - 1) / 4
    }

    pub fn value(self) -> Value {
        VALUES[self.value_index() as usize]
    }

    pub fn suit(self) -> Suit {
        SUITS[(self.0 % 4) as usize]
    }

    /// True when both cards share a suit.
    pub fn suited_with(self, other: Card) -> bool {
        self.suit() == other.suit()
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Card, CardError> {
        Card::new(id)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value().to_char(), self.suit().to_char())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Card, CardError> {
        let mut chars = s.chars();
        let (vc, sc) = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => (v, s),
            _ => return Err(CardError::BadNotationLength),
        };
        let value = Value::from_char(vc).ok_or(CardError::UnknownValueChar(vc))?;
        let suit = Suit::from_char(sc).ok_or(CardError::UnknownSuitChar(sc))?;
        Ok(Card::from_parts(value, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_bounds() {
        assert!(Card::new(0).is_err());
        assert!(Card::new(53).is_err());
        assert!(Card::new(1).is_ok());
        assert!(Card::new(52).is_ok());
    }

    #[test]
    fn test_codec_round_trip() {
        for id in Card::MIN_ID..=Card::MAX_ID {
            let card = Card::new(id).unwrap();
            let rebuilt = Card::from_parts(card.value(), card.suit());
            assert_eq!(card, rebuilt);
        }
    }

    #[test]
    fn test_known_ids() {
        // The two of clubs is the first card and the ace of spades the last.
        assert_eq!("2c".parse::<Card>().unwrap().id(), 1);
        assert_eq!("2d".parse::<Card>().unwrap().id(), 2);
        assert_eq!("2h".parse::<Card>().unwrap().id(), 3);
        assert_eq!("2s".parse::<Card>().unwrap().id(), 4);
        assert_eq!("As".parse::<Card>().unwrap().id(), 52);
        assert_eq!("Ac".parse::<Card>().unwrap().id(), 49);
    }

    #[test]
    fn test_value_and_suit_extraction() {
        let king_hearts = "Kh".parse::<Card>().unwrap();
        assert_eq!(king_hearts.value(), Value::King);
        assert_eq!(king_hearts.suit(), Suit::Heart);
        assert_eq!(king_hearts.value_index(), 11);
    }

    #[test]
    fn test_display_round_trip() {
        for id in Card::MIN_ID..=Card::MAX_ID {
            let card = Card::new(id).unwrap();
            let parsed: Card = card.to_string().parse().unwrap();
            assert_eq!(card, parsed);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "Xs".parse::<Card>(),
            Err(CardError::UnknownValueChar('X'))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(CardError::UnknownSuitChar('x'))
        );
        assert_eq!("A".parse::<Card>(), Err(CardError::BadNotationLength));
        assert_eq!("Asd".parse::<Card>(), Err(CardError::BadNotationLength));
    }

    #[test]
    fn test_suited_with() {
        let a: Card = "Ah".parse().unwrap();
        let b: Card = "2h".parse().unwrap();
        let c: Card = "2s".parse().unwrap();
        assert!(a.suited_with(b));
        assert!(!a.suited_with(c));
    }
}
