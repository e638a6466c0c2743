//! Error types.
//!
//! Three layers, checked in this order:
//! - `ConfigError`: malformed input rejected at the boundary (seeds, move
//!   tokens, hand-built positions) before any board state is touched.
//! - `BoardError`: a single board operation refused; the board is unchanged.
//! - `MoveError`: what `FreeCell::apply_move` reports to callers.

use super::action::Move;

/// Malformed configuration or notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid seed {0:?}: expected an unsigned 32-bit integer")]
    InvalidSeed(String),

    #[error("empty token")]
    EmptyToken,

    #[error("invalid card {0:?}")]
    InvalidCard(String),

    #[error("rank {0} out of range 1..=13")]
    InvalidRank(u8),

    #[error("invalid destination {0:?}: expected F, S, 0 or a card")]
    InvalidDestination(String),

    #[error("expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("expected {expected} free cells, got {actual}")]
    FreeCellCount { expected: usize, actual: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(String),

    #[error("suit stack for {suit} holds {card}")]
    WrongStackSuit { suit: String, card: String },
}

/// Why a board operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("card is not exposed")]
    NotExposed,

    #[error("card is already in a free cell")]
    AlreadyInFreeCell,

    #[error("card does not continue its suit stack")]
    NotStackable,

    #[error("card is not one rank lower and the opposite color")]
    NotPlayable,

    #[error("all free cells are occupied")]
    FreeCellsFull,

    #[error("no empty column")]
    NoEmptyColumn,
}

/// Failure to apply a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not among the currently legal moves. State is unchanged.
    #[error("illegal move {0}")]
    Illegal(Move),

    /// A move listed as legal was refused by the board. This is a logic
    /// defect, not a player mistake.
    #[error("internal inconsistency: legal move {mv} refused by board: {source}")]
    InternalInconsistency { mv: Move, source: BoardError },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MoveError {
    /// True for defects, as opposed to ordinary rejections.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, MoveError::InternalInconsistency { .. })
    }
}
