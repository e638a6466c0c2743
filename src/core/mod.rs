//! Core value types: cards, deck, moves, RNG, configuration, errors.
//!
//! Everything here is free of board state. The board and the game build on
//! these types.

pub mod card;
pub mod suit_map;
pub mod rng;
pub mod deck;
pub mod config;
pub mod action;
pub mod error;

pub use card::{Card, Color, Suit, ACE, KING, RANKS_PER_SUIT};
pub use suit_map::SuitMap;
pub use rng::{DealRng, EntropySource, FixedSeed, SeedSource, SeededSource, MAX_RANDOM_SEED};
pub use deck::{Deck, DECK_SIZE, DEFAULT_SEED};
pub use config::{parse_seed, FreeCellConfig, COLUMN_COUNT, DEAL_PATTERN, FREE_CELL_COUNT};
pub use action::{Destination, Move, EMPTY_COLUMN_TOKEN, FREE_CELL_TOKEN, SUIT_STACK_TOKEN};
pub use error::{BoardError, ConfigError, MoveError};
