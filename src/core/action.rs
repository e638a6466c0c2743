//! Move representation: a card plus a destination.
//!
//! A move is written as a pair of short strings. The first is the card's
//! canonical text. The second is one of:
//! - `"F"`: any free cell
//! - `"S"`: the card's suit stack
//! - `"0"`: an empty column
//! - another card's text: onto that card
//!
//! `("Ad", "2c")` moves the Ace of Diamonds onto the Two of Clubs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::Card;
use super::error::ConfigError;

/// Token for a free-cell destination.
pub const FREE_CELL_TOKEN: &str = "F";
/// Token for a suit-stack destination.
pub const SUIT_STACK_TOKEN: &str = "S";
/// Token for an empty-column destination.
pub const EMPTY_COLUMN_TOKEN: &str = "0";

/// Where a card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    FreeCell,
    SuitStack,
    EmptyColumn,
    /// On top of the given card's column.
    Card(Card),
}

impl Destination {
    /// The destination token.
    #[must_use]
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::FreeCell => f.write_str(FREE_CELL_TOKEN),
            Destination::SuitStack => f.write_str(SUIT_STACK_TOKEN),
            Destination::EmptyColumn => f.write_str(EMPTY_COLUMN_TOKEN),
            Destination::Card(card) => write!(f, "{card}"),
        }
    }
}

impl FromStr for Destination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "" => Err(ConfigError::EmptyToken),
            FREE_CELL_TOKEN => Ok(Destination::FreeCell),
            SUIT_STACK_TOKEN => Ok(Destination::SuitStack),
            EMPTY_COLUMN_TOKEN => Ok(Destination::EmptyColumn),
            _ => token
                .parse::<Card>()
                .map(Destination::Card)
                .map_err(|_| ConfigError::InvalidDestination(token.to_string())),
        }
    }
}

/// A single-card move.
///
/// ## Example
///
/// ```
/// use freecell_core::core::{Destination, Move};
///
/// let mv = Move::parse("Ad", "2c").unwrap();
/// assert_eq!(mv.destination, Destination::Card("2c".parse().unwrap()));
/// assert_eq!(mv.to_pair(), ("Ad".to_string(), "2c".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card being moved.
    pub card: Card,
    pub destination: Destination,
}

impl Move {
    #[must_use]
    pub const fn new(card: Card, destination: Destination) -> Self {
        Self { card, destination }
    }

    /// Parse the two-token notation.
    pub fn parse(card: &str, destination: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            card: card.parse()?,
            destination: destination.parse()?,
        })
    }

    /// The two-token notation.
    #[must_use]
    pub fn to_pair(&self) -> (String, String) {
        (self.card.to_string(), self.destination.token())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.card, self.destination)
    }
}
