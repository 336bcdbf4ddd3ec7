// Random number sources for AI decisions and question draws

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integer draws.
///
/// Game code only ever asks for "a number below N", so tests can inject a
/// fixed sequence instead of real entropy.
pub trait RandomSource {
    /// Uniform draw in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        self.below(len.max(1) as u32) as usize
    }
}

/// Seeded random number generator owned by the match.
///
/// When a seed is provided the same seed always replays the same AI choices
/// and question draws. Without a seed, uses system entropy.
#[derive(Debug)]
pub struct GameRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a generator with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this generator was created with, if deterministic
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound.max(1))
    }
}
