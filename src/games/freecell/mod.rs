//! FreeCell solitaire.
//!
//! - 52 cards dealt from a seed into 8 columns (6, 6, 6, 6, 7, 7, 7, 7)
//! - 4 free cells, each holding one card
//! - 4 suit stacks built Ace to King
//! - Columns build down in alternating colors, one card at a time
//!
//! The game is won when all four stacks reach their King, and lost when no
//! legal move remains.

mod game;

pub use game::{FreeCell, FreeCellBuilder};
