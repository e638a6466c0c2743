//! Board state and the single-card move rules.
//!
//! The `Board` tracks where every card is (columns, free cells, suit stacks)
//! and performs the four kinds of transition:
//! - column top or free cell to suit stack
//! - column top to free cell
//! - column top or free cell to an empty column
//! - column top or free cell onto another column top

pub mod layout;
pub mod snapshot;

pub use layout::{Board, Column, Location};
pub use snapshot::BoardSnapshot;
