//! Monte Carlo estimation of π from points sampled in the unit square.
//!
//! A point `(x, y)` drawn uniformly from `[0, 1)²` lands inside the unit quarter
//! circle (`x² + y² ≤ 1`) with probability π/4, so `4 · hits / samples`
//! estimates π. Two implementations share that estimator:
//!
//! - [`ScalarPiEstimator`] walks the samples one at a time, drawing an `(x, y)`
//!   pair per sample.
//! - [`BulkPiEstimator`] draws every `x`, then every `y`, into flat buffers and
//!   tests them elementwise.
//!
//! The draw orders differ, so the two return different estimates for the same
//! seed. Each is bit-reproducible for a fixed seed and generator kind. Both own
//! their generator for the duration of one call; there is no shared state.

pub mod bulk;
pub mod scalar;

use serde::{Deserialize, Serialize};

use crate::core::NumericResult;

pub use bulk::{BulkPiEstimator, count_hits};
pub use scalar::ScalarPiEstimator;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 101;

/// Outcome of one estimator run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiEstimate {
    /// `4 · hits / samples`.
    pub value: f64,
    /// Samples inside the quarter circle.
    pub hits: u64,
    /// Points drawn.
    pub samples: u64,
    /// Binomial standard error `4 · sqrt(p (1 - p) / samples)`, `p = hits / samples`.
    pub stderr: f64,
}

impl PiEstimate {
    /// Builds the estimate from raw counts. `samples` must be non-zero.
    pub(crate) fn from_counts(hits: u64, samples: u64) -> Self {
        let n = samples as f64;
        let p = hits as f64 / n;
        Self {
            value: 4.0 * hits as f64 / n,
            hits,
            samples,
            stderr: 4.0 * (p * (1.0 - p) / n).sqrt(),
        }
    }
}

/// Common interface of the π estimators.
pub trait PiEstimator {
    /// Short identifier for reports and bench ids.
    fn name(&self) -> &'static str;

    /// Runs the estimator over `num_samples` points. Fails when `num_samples == 0`.
    fn estimate(&self, num_samples: usize) -> NumericResult<PiEstimate>;
}

/// π from `num_samples` per-sample `(x, y)` pairs, seeded with `seed`.
///
/// ```rust
/// use numkit::mc::{DEFAULT_SEED, estimate_pi_scalar};
///
/// let pi = estimate_pi_scalar(100_000, DEFAULT_SEED).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.05);
/// ```
pub fn estimate_pi_scalar(num_samples: usize, seed: u64) -> NumericResult<f64> {
    ScalarPiEstimator::new(seed)
        .estimate(num_samples)
        .map(|est| est.value)
}

/// π from `num_samples` bulk-drawn x values followed by as many y values, seeded
/// with `seed`.
pub fn estimate_pi_bulk(num_samples: usize, seed: u64) -> NumericResult<f64> {
    BulkPiEstimator::new(seed)
        .estimate(num_samples)
        .map(|est| est.value)
}
