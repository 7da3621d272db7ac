//! Structure-of-arrays π estimator: one buffer of x draws, one of y draws.

use serde::{Deserialize, Serialize};

use crate::core::{NumericResult, require_nonzero_count};
use crate::math::fast_rng::{FastRng, FastRngKind};
use crate::mc::{DEFAULT_SEED, PiEstimate, PiEstimator};

/// Fills all `num_samples` x values first, then all y values, then counts hits
/// over the two buffers elementwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPiEstimator {
    /// Seed for the generator created on each run.
    pub seed: u64,
    /// Generator family; defaults to `StdRng`.
    pub rng_kind: FastRngKind,
}

impl Default for BulkPiEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl BulkPiEstimator {
    /// Estimator seeded with `seed` on the default generator.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_kind: FastRngKind::StdRng,
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

/// Number of index pairs with `xs[i]² + ys[i]² <= 1`.
///
/// Only the common prefix of the two slices is inspected.
pub fn count_hits(xs: &[f64], ys: &[f64]) -> u64 {
    xs.iter()
        .zip(ys.iter())
        .map(|(&x, &y)| x * x + y * y)
        .filter(|&r| r <= 1.0)
        .count() as u64
}

impl PiEstimator for BulkPiEstimator {
    fn name(&self) -> &'static str {
        "bulk"
    }

    fn estimate(&self, num_samples: usize) -> NumericResult<PiEstimate> {
        require_nonzero_count("num_samples", num_samples)?;

        let mut rng = FastRng::from_seed(self.rng_kind, self.seed);
        let mut xs = vec![0.0_f64; num_samples];
        let mut ys = vec![0.0_f64; num_samples];
        rng.fill_uniform(&mut xs);
        rng.fill_uniform(&mut ys);

        Ok(PiEstimate::from_counts(
            count_hits(&xs, &ys),
            num_samples as u64,
        ))
    }
}
