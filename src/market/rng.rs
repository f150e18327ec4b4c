//! Injectable source of normally-distributed samples
//!
//! The rate engine and shock timers never talk to `rand` directly; they draw
//! through `RandomSource` so tests can substitute deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;

/// Source of real-valued draws from a normal distribution
pub trait RandomSource {
    /// Return the next sample from Normal(mean, std_dev).
    /// A zero std-dev must return the mean exactly.
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Production source backed by a PRNG
pub struct GaussianSource<R: Rng> {
    rng: R,
}

impl GaussianSource<StdRng> {
    /// Seeded source for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// OS-entropy source for production runs
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for GaussianSource<R> {
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev <= 0.0 || !std_dev.is_finite() {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }
}

/// Deterministic source replaying a fixed sequence of z-scores
///
/// Each draw pops the next z and returns `mean + std_dev * z`; once the
/// sequence is exhausted every draw returns the mean (z = 0).
pub struct ScriptedSource {
    z_scores: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(z_scores: impl IntoIterator<Item = f64>) -> Self {
        Self {
            z_scores: z_scores.into_iter().collect(),
        }
    }

    /// Source that always returns the mean (all z-scores zero)
    pub fn zeros() -> Self {
        Self::new([])
    }
}

impl RandomSource for ScriptedSource {
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z = self.z_scores.pop_front().unwrap_or(0.0);
        mean + std_dev * z
    }
}
