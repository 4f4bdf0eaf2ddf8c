//! RNG module - seeded blob color source
//!
//! One generator is held for the whole run and threaded into every spawn, so
//! the same seed always produces the same color sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::BlobColor;

#[derive(Debug, Clone)]
pub struct ColorSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl ColorSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform draw from the four-color palette
    pub fn next_color(&mut self) -> BlobColor {
        BlobColor::ALL[self.rng.gen_range(0..BlobColor::ALL.len())]
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
