//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for the current position
//! - How moves modify state
//! - Won/lost conditions
//!
//! Callers drive play through `RulesEngine` and never touch the board's
//! transitions directly.

pub mod engine;

pub use engine::{GameStatus, RulesEngine};
