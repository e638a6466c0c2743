//! Rules engine trait for solitaire implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify state
//! - Won/lost conditions

use serde::{Deserialize, Serialize};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one legal move remains and the game is not won.
    Ongoing,
    /// Every card is home.
    Won,
    /// Not won and no legal move remains.
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Rules engine trait.
///
/// A single-player game owns its state; the caller loops over
/// `enumerate_moves` / `apply_move` / `classify_state` until the status is
/// terminal.
///
/// ## Implementation Notes
///
/// - `enumerate_moves`: every legal move exactly once, in a stable order
/// - `apply_move`: must reject anything not in `enumerate_moves` without
///   changing state
/// - `start_game`: `None` lets the implementation pick a seed
pub trait RulesEngine {
    /// A move a player can make.
    type Move: Clone + PartialEq;

    /// Caller-facing copy of the game state.
    type Snapshot;

    /// Why a move was not applied.
    type Error;

    /// List every currently legal move.
    fn enumerate_moves(&self) -> Vec<Self::Move>;

    /// Apply a legal move.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Classify the current position.
    fn classify_state(&self) -> GameStatus;

    /// Copy out the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Throw away the current game and deal a new one.
    fn start_game(&mut self, seed: Option<u32>);

    // === Convenience Methods ===

    /// Check a move against the current enumeration.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.enumerate_moves().contains(mv)
    }

    /// `Some(status)` once the game has ended, `None` while it continues.
    fn is_terminal(&self) -> Option<GameStatus> {
        let status = self.classify_state();
        status.is_terminal().then_some(status)
    }
}
