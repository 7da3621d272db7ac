//! Sample-at-a-time π estimator.

use serde::{Deserialize, Serialize};

use crate::core::{NumericResult, require_nonzero_count};
use crate::math::fast_rng::{FastRng, FastRngKind};
use crate::mc::{DEFAULT_SEED, PiEstimate, PiEstimator};

/// Draws `x` then `y` for sample 0, then sample 1, and so on: exactly two draws
/// per sample, in sample order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarPiEstimator {
    /// Seed for the generator created on each run.
    pub seed: u64,
    /// Generator family; defaults to xoshiro256++.
    pub rng_kind: FastRngKind,
}

impl Default for ScalarPiEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl ScalarPiEstimator {
    /// Estimator seeded with `seed` on the default generator.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_kind: FastRngKind::Xoshiro256PlusPlus,
        }
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Switches the generator family.
    pub fn with_rng_kind(mut self, rng_kind: FastRngKind) -> Self {
        self.rng_kind = rng_kind;
        self
    }
}

impl PiEstimator for ScalarPiEstimator {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn estimate(&self, num_samples: usize) -> NumericResult<PiEstimate> {
        require_nonzero_count("num_samples", num_samples)?;

        let mut rng = FastRng::from_seed(self.rng_kind, self.seed);
        let mut hits = 0_u64;
        for _ in 0..num_samples {
            let x = rng.random_f64();
            let y = rng.random_f64();
            if x * x + y * y <= 1.0 {
                hits += 1;
            }
        }

        Ok(PiEstimate::from_counts(hits, num_samples as u64))
    }
}
