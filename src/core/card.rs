//! Playing cards: suit, color, rank and the two stacking predicates.
//!
//! ## Textual form
//!
//! Every card has a canonical two-character form: a rank symbol
//! (`A`, `2`-`9`, `T`, `J`, `Q`, `K`) followed by a lower-case suit letter
//! (`h`, `d`, `c`, `s`). The Ten of Hearts is `"Th"`.
//!
//! This form is what moves are written in, so `Card` serializes as its
//! short text rather than as a struct.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ConfigError;

/// Lowest rank (Ace).
pub const ACE: u8 = 1;

/// Highest rank (King).
pub const KING: u8 = 13;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// The four suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical order (hearts, diamonds, clubs, spades).
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    /// Card color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter code used in the short card form.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Parse a suit letter. Upper case is accepted.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// English name, plural (`"Hearts"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card color. Tableau sequences alternate colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// An immutable playing card.
///
/// Equality is rank + suit equality. There is no notion of card identity
/// beyond that, which is fine because a single deck never repeats a card.
///
/// ## Example
///
/// ```
/// use freecell_core::core::{Card, Suit};
///
/// let ten = Card::new(10, Suit::Hearts).unwrap();
/// assert_eq!(ten.to_string(), "Th");
/// assert_eq!("Th".parse::<Card>().unwrap(), ten);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Create a card. `rank` must be in `1..=13`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, ConfigError> {
        if !(ACE..=KING).contains(&rank) {
            return Err(ConfigError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Build a card from its canonical deck index (`0..52`).
    ///
    /// Index order is suits outer, ranks inner, matching [`Card::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let suit = *Suit::ALL.get(index / RANKS_PER_SUIT)?;
        let rank = (index % RANKS_PER_SUIT) as u8 + ACE;
        Some(Self { suit, rank })
    }

    /// Rank, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Position in the canonical unshuffled deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * RANKS_PER_SUIT + (self.rank - ACE) as usize
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.rank == KING
    }

    /// Can `self` be placed on `other` in a column?
    ///
    /// True iff `self` is exactly one rank below `other` and the colors differ.
    #[must_use]
    pub fn is_smaller_and_different_color(self, other: Card) -> bool {
        self.rank + 1 == other.rank && self.color() != other.color()
    }

    /// Can `self` go onto a suit stack whose current top is `top`?
    ///
    /// An empty stack (`None`) only takes an Ace. Otherwise `self` must be the
    /// next rank of the same suit.
    #[must_use]
    pub fn is_larger_and_same_suit(self, top: Option<Card>) -> bool {
        match top {
            None => self.rank == ACE,
            Some(other) => self.rank == other.rank + 1 && self.suit == other.suit,
        }
    }

    /// Rank symbol used in the short form.
    #[must_use]
    pub const fn rank_symbol(self) -> char {
        match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            r => (b'0' + r) as char,
        }
    }

    /// Human-readable name, e.g. `"Ten of Hearts"`.
    #[must_use]
    pub fn long_name(self) -> String {
        let rank = match self.rank {
            1 => "Ace",
            2 => "Two",
            3 => "Three",
            4 => "Four",
            5 => "Five",
            6 => "Six",
            7 => "Seven",
            8 => "Eight",
            9 => "Nine",
            10 => "Ten",
            11 => "Jack",
            12 => "Queen",
            _ => "King",
        };
        format!("{} of {}", rank, self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.letter())
    }
}

fn parse_rank(symbol: &str) -> Option<u8> {
    match symbol.to_ascii_uppercase().as_str() {
        "A" => Some(1),
        "T" | "10" => Some(10),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        digit => match digit.parse::<u8>() {
            Ok(r) if (2..=9).contains(&r) => Some(r),
            _ => None,
        },
    }
}

impl FromStr for Card {
    type Err = ConfigError;

    /// Parse the short form. Accepts `"10"` for ten and upper-case suits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        let invalid = || ConfigError::InvalidCard(text.to_string());
        let suit_letter = text.chars().last().ok_or_else(invalid)?;
        let rank_text = &text[..text.len() - suit_letter.len_utf8()];

        let suit = Suit::from_letter(suit_letter).ok_or_else(invalid)?;
        let rank = parse_rank(rank_text).ok_or_else(invalid)?;

        Ok(Self { suit, rank })
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
