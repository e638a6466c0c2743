//! Game configuration.
//!
//! The deal seed is the only input to deck generation. `FreeCellConfig`
//! holds an optional explicit seed; when absent, the game asks its
//! [`SeedSource`](super::SeedSource) once per new deal.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 8;

/// Number of free cells.
pub const FREE_CELL_COUNT: usize = 4;

/// Column sizes for a full deal, dealt left to right.
pub const DEAL_PATTERN: [usize; COLUMN_COUNT] = [6, 6, 6, 6, 7, 7, 7, 7];

/// Parse a seed from text.
///
/// ```
/// use freecell_core::core::parse_seed;
///
/// assert_eq!(parse_seed(" 617 ").unwrap(), 617);
/// assert!(parse_seed("-1").is_err());
/// ```
pub fn parse_seed(text: &str) -> Result<u32, ConfigError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyToken);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidSeed(trimmed.to_string()))
}

/// Configuration for a FreeCell game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeCellConfig {
    /// Explicit deal seed. `None` lets the seed source choose.
    pub seed: Option<u32>,
}

impl FreeCellConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a seed given as text, e.g. from a command line.
    pub fn seed_from_str(self, text: &str) -> Result<Self, ConfigError> {
        Ok(self.with_seed(parse_seed(text)?))
    }
}
