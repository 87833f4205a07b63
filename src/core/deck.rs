use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardSet, HandError};

/// A deck of cards in dealt order.
///
/// Either a fresh uniform shuffle of all 52 cards or an externally
/// supplied deal used to replay a single known hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in id order. This is the deck the simulator
    /// shuffles each trial.
    pub fn ordered() -> Deck {
        let cards = (Card::MIN_ID..=Card::MAX_ID)
            .filter_map(|id| Card::new(id).ok())
            .collect();
        Deck { cards }
    }

    /// A uniformly random permutation of the full deck.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Deck {
        let mut deck = Deck::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Wrap an externally supplied deal. The cards must be distinct;
    /// a partial deck is accepted so a caller can replay just the dealt
    /// prefix of a hand.
    pub fn fixed(cards: Vec<Card>) -> Result<Deck, HandError> {
        let mut seen = CardSet::new();
        for &card in &cards {
            if seen.contains(card) {
                return Err(HandError::DuplicateCard(card));
            }
            seen.insert(card);
        }
        Ok(Deck { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
