//! # freecell-core
//!
//! Rules engine for FreeCell solitaire.
//!
//! ## Design Principles
//!
//! 1. **Reproducible deals**: a deal is a pure function of its seed. The
//!    seed of every game is exposed so it can be replayed.
//!
//! 2. **Atomic transitions**: a refused move never changes the board.
//!
//! 3. **Injected randomness**: when no seed is given, one is drawn from a
//!    `SeedSource` handed to the game, never from process-global state.
//!
//! ## Ruleset
//!
//! Single-card moves only. The top card of a column or a free-cell occupant
//! may move to a free cell, its suit stack, an empty column, or onto a
//! column top one rank higher of the other color. Multi-card runs are not
//! moved as a unit.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, moves, RNG, configuration, errors
//! - `board`: Board layout, transitions and snapshots
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The FreeCell state machine
//!
//! ## Example
//!
//! ```
//! use freecell_core::{FreeCell, GameStatus, RulesEngine};
//!
//! let mut game = FreeCell::new(1);
//! assert_eq!(game.classify_state(), GameStatus::Ongoing);
//!
//! let first = game.enumerate_moves()[0];
//! game.apply_move(&first).unwrap();
//! assert_eq!(game.move_count(), 1);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Suit, SuitMap,
    Deck, DealRng, SeedSource, FixedSeed, SeededSource, EntropySource,
    Move, Destination, FreeCellConfig, parse_seed,
    BoardError, ConfigError, MoveError,
};

pub use crate::board::{Board, BoardSnapshot, Column, Location};

pub use crate::rules::{GameStatus, RulesEngine};

pub use crate::games::freecell::{FreeCell, FreeCellBuilder};
