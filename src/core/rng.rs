//! Deterministic deal generation and injectable seed selection.
//!
//! ## DealRng
//!
//! The linear-congruential generator that drives the deck shuffle:
//!
//! ```text
//! state = (state * 214013 + 2531011) mod 2^31
//! value = state >> 16
//! ```
//!
//! The arithmetic is reproduced bit for bit so that a recorded seed always
//! replays the same deal.
//!
//! ## Seed sources
//!
//! When a game starts without an explicit seed, one is drawn from a
//! [`SeedSource`]. The source is passed in rather than read from process-wide
//! randomness, so tests pin it with [`FixedSeed`] or [`SeededSource`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Generator state is kept to the low 31 bits.
const STATE_MASK: u32 = (1 << 31) - 1;
const MULTIPLIER: u32 = 214_013;
const INCREMENT: u32 = 2_531_011;

/// Largest seed a [`SeedSource`] will hand out.
pub const MAX_RANDOM_SEED: u32 = 1_000_000;

/// Linear-congruential generator used for dealing.
///
/// ```
/// use freecell_core::core::DealRng;
///
/// let values: Vec<u32> = DealRng::new(1).take(3).collect();
/// assert_eq!(values, vec![41, 18467, 6334]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    /// Create a generator. Only the low 31 bits of `seed` are used.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: seed & STATE_MASK,
        }
    }

    /// Advance one step and return `state >> 16`.
    pub fn next_value(&mut self) -> u32 {
        // Wrapping in 2^32 then masking is the same as reducing mod 2^31.
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state >> 16
    }
}

impl Iterator for DealRng {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_value())
    }
}

/// Supplies seeds for new games.
pub trait SeedSource: fmt::Debug {
    /// Choose the seed for the next deal.
    fn next_seed(&mut self) -> u32;
}

/// Always returns the same seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u32 {
        self.0
    }
}

/// Reproducible stream of deal seeds derived from a master seed.
///
/// Uses ChaCha8, so a series of games started from the same master seed
/// sees the same series of deals.
#[derive(Clone, Debug)]
pub struct SeededSource {
    inner: ChaCha8Rng,
    master_seed: u64,
}

impl SeededSource {
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(master_seed),
            master_seed,
        }
    }

    #[must_use]
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }
}

impl SeedSource for SeededSource {
    fn next_seed(&mut self) -> u32 {
        self.inner.gen_range(0..=MAX_RANDOM_SEED)
    }
}

/// Non-deterministic seeds from OS entropy.
#[derive(Clone, Debug)]
pub struct EntropySource {
    inner: ChaCha8Rng,
}

impl EntropySource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for EntropySource {
    fn next_seed(&mut self) -> u32 {
        self.inner.gen_range(0..=MAX_RANDOM_SEED)
    }
}
