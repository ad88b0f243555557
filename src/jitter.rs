//! Bounded random perturbation, injected instead of sampled globally.
//!
//! The calculators add jitter to emulate real-world variance. Sampling a
//! global RNG inside otherwise pure functions makes runs unreproducible, so
//! the engine threads one [`Jitter`] value through every calculator: seeded
//! for reproducible runs, OS-seeded for display variety, or disabled so
//! tests can pin exact outputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Jitter {
    rng: Option<StdRng>,
}

impl Jitter {
    /// Reproducible jitter: the same seed yields the same run.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// OS-seeded jitter for display runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: Some(StdRng::from_os_rng()),
        }
    }

    /// No jitter at all; every draw returns zero.
    pub fn disabled() -> Self {
        Self { rng: None }
    }

    /// Uniform draw from `[-range, +range]`. Zero when disabled or when
    /// `range` is not a positive finite number.
    pub fn symmetric(&mut self, range: f64) -> f64 {
        if !(range > 0.0) || !range.is_finite() {
            return 0.0;
        }
        match &mut self.rng {
            Some(rng) => rng.random_range(-range..=range),
            None => 0.0,
        }
    }

    /// Uniform draw from `[-fraction, +fraction]` of `value`.
    pub fn proportional(&mut self, value: f64, fraction: f64) -> f64 {
        self.symmetric(value.abs() * fraction)
    }
}
