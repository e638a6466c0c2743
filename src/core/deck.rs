//! The 52-card deck and its seeded shuffle.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::rng::DealRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Seed used by `Deck::default()`.
pub const DEFAULT_SEED: u32 = 1;

/// A full deck plus the seed that shuffles it.
///
/// The canonical order is hearts, diamonds, clubs, spades, each Ace to King.
/// [`Deck::cards_shuffled`] is a pure function of the seed.
///
/// ```
/// use freecell_core::core::Deck;
///
/// let a = Deck::new(42).cards_shuffled();
/// let b = Deck::new(42).cards_shuffled();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    seed: u32,
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let cards = (0..DECK_SIZE).filter_map(Card::from_index).collect();
        Self { seed, cards }
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The canonical, unshuffled card order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle a copy of the deck.
    ///
    /// For each position `i`, one generator value `r` picks the swap partner
    /// `j = 51 - r mod (52 - i)`.
    #[must_use]
    pub fn cards_shuffled(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        let len = cards.len();
        let mut rng = DealRng::new(self.seed);

        for i in 0..len {
            let r = rng.next_value() as usize;
            let j = (len - 1) - r % (len - i);
            cards.swap(i, j);
        }

        cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
