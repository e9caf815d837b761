//! Injectable randomness
//!
//! Every random generator receives its source explicitly, so a fixed seed
//! reproduces the exact same graph.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform random draws used by the generators
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn uniform_float(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`; `bound` must be non-zero
    fn uniform_int(&mut self, bound: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_float(&mut self) -> f64 {
        (**self).uniform_float()
    }

    fn uniform_int(&mut self, bound: u64) -> u64 {
        (**self).uniform_int(bound)
    }
}

/// Fresh seed from the operating system
pub fn entropy_seed() -> u64 {
    rand::rngs::OsRng.next_u64()
}

/// `StdRng`-backed source that remembers its seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed drawn from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn uniform_int(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "uniform_int bound must be non-zero");
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}
