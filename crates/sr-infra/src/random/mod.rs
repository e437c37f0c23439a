//! Random index sources backed by `rand`.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sr_core::ports::RandomSourcePort;

/// Thread-local RNG; a fresh order on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSourcePort for ThreadRandomSource {
    fn next_below(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper.max(1))
    }
}

/// Reproducible sequence for a fixed seed.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSourcePort for SeededRandomSource {
    fn next_below(&self, upper: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.random_range(0..upper.max(1))
    }
}
