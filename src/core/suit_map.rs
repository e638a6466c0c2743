//! Per-suit data storage.
//!
//! `SuitMap<T>` holds exactly one value per [`Suit`], backed by a fixed
//! array for O(1) access. Suit stacks are a `SuitMap<Option<Card>>`.
//!
//! [`Card`]: super::Card

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::card::Suit;

/// One value per suit, indexed by `Suit`.
///
/// ## Example
///
/// ```
/// use freecell_core::core::{Suit, SuitMap};
///
/// let mut placed: SuitMap<u8> = SuitMap::with_value(0);
/// placed[Suit::Clubs] = 3;
/// assert_eq!(placed[Suit::Clubs], 3);
/// assert_eq!(placed[Suit::Hearts], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create a SuitMap with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    /// Create a SuitMap with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Wrap an array already in canonical suit order.
    #[must_use]
    pub fn from_array(data: [T; 4]) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn get(&self, suit: Suit) -> &T {
        &self.data[suit.index()]
    }

    pub fn get_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.data[suit.index()]
    }

    /// Iterate over (Suit, &T) pairs in canonical suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.data.iter())
    }

    /// Values in canonical suit order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Copy out the values as an array in canonical suit order.
    #[must_use]
    pub fn to_array(&self) -> [T; 4]
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        self.get(suit)
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        self.get_mut(suit)
    }
}
