//! The deterministic per-run random stream.
//!
//! # Determinism strategy
//!
//! One run consumes every draw (partner choice, transmission coin flips,
//! waning durations, seeding) from a single `SmallRng` in a fixed order, so a
//! given seed reproduces the run exactly.  Independent runs of an ensemble
//! each construct their own `SimRng`; a `SimRng` is never shared between
//! runs or threads.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use crate::{CoreError, CoreResult};

/// Simulation-level RNG.  Not `Sync`; hand each worker its own instance.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// Effective probabilities such as `beta * multiplier` may exceed 1; they
    /// then always succeed.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draw an index with probability proportional to `weights[i]`.
    ///
    /// Returns `None` when `weights` is empty or sums to zero; callers treat
    /// that exactly like an empty candidate pool.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(&mut self.0))
    }

    /// `amount` distinct indices drawn uniformly from `0..length`.
    ///
    /// `amount` is capped at `length`, so the pool may be smaller than asked.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.0, length, amount.min(length)).into_vec()
    }

    /// One draw from `Normal(mean, sd)`.
    ///
    /// `sd` must be finite and non-negative.
    pub fn normal(&mut self, mean: f64, sd: f64) -> CoreResult<f64> {
        if !sd.is_finite() || sd < 0.0 {
            return Err(CoreError::Config(format!("normal({mean}, {sd}): sd must be finite and >= 0")));
        }
        let dist = Normal::new(mean, sd)
            .map_err(|e| CoreError::Config(format!("normal({mean}, {sd}): {e}")))?;
        Ok(self.0.sample(dist))
    }
}
