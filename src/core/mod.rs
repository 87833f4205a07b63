/// Module with the integer card codec shared by every other component.
mod card;
/// Export `Card`, `Value`, `Suit` and the parse error.
pub use self::card::{Card, CardError, Suit, Value};

/// Module with the bitset representation of a group of cards.
mod card_set;
/// Export `CardSet`
pub use self::card_set::{CardSet, CardSetIter};

/// Module for decks in dealt order, shuffled or externally supplied.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Module that enumerates k-card combinations of the live deck.
mod card_iter;
/// Export `CombinationIter`
pub use self::card_iter::{CombinationIter, live_cards};

/// Hand and deck validation errors.
mod errors;
pub use self::errors::HandError;
