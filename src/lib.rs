//! numkit collects two small numerical kernels that are handy for profiling and
//! for checking numerical behaviour against closed forms.
//!
//! - [`conduction`]: transient conduction cooling of a rectangular box with
//!   fixed surface temperature, by truncated Fourier-cosine series per axis and
//!   the multiplicative product solution across axes.
//! - [`mc`]: Monte Carlo estimation of π, once sample-by-sample and once over
//!   bulk-drawn coordinate buffers, so a profiler can compare the two paths.
//!
//! Every operation is a synchronous, pure (or seed-deterministic) function of
//! its arguments. Random generators are created per call from the seed; nothing
//! is cached or shared across calls.
//!
//! References:
//! - Carslaw and Jaeger, *Conduction of Heat in Solids* (2nd ed.), §6.3, for
//!   products of one-dimensional solutions. The per-term decay exponent used here
//!   is `α t (2n+1)² / 4X²`; see [`conduction::series`].
//! - Glasserman (2004), Ch. 1, for the hit-or-miss estimator and its binomial
//!   standard error.
//!
//! Numerical considerations:
//! - The series depth is a fixed term count (1000 by default), not a tolerance.
//!   An optional envelope tolerance can stop summation earlier.
//! - NaN or infinities from out-of-domain inputs (negative time or diffusivity)
//!   propagate as IEEE results rather than errors.
//!
//! # Quick Start
//! Temperature at the centre of a cooling cube:
//! ```rust
//! use numkit::conduction::box_temperature;
//!
//! let t = box_temperature(3600.0, 0.0, 0.0, 0.0, 1.0e-4, 1.0, 1.0, 1.0, 100.0, 20.0, 1000)
//!     .unwrap();
//! assert!(t > 20.0 && t < 100.0);
//! ```
//!
//! Compare the two π estimators:
//! ```rust
//! use numkit::mc::{BulkPiEstimator, PiEstimator, ScalarPiEstimator};
//!
//! let scalar = ScalarPiEstimator::new(101).estimate(100_000).unwrap();
//! let bulk = BulkPiEstimator::new(101).estimate(100_000).unwrap();
//! assert!((scalar.value - std::f64::consts::PI).abs() < 0.05);
//! assert!((bulk.value - std::f64::consts::PI).abs() < 0.05);
//! ```

pub mod conduction;
pub mod core;
pub mod math;
pub mod mc;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::conduction::{
        BoxCoolingModel, BoxGeometry, BoxPoint, DEFAULT_SERIES_TERMS, SeriesConfig, axis_theta,
        box_temperature,
    };
    pub use crate::core::{NumericError, NumericResult};
    pub use crate::math::FastRngKind;
    pub use crate::mc::{
        BulkPiEstimator, DEFAULT_SEED, PiEstimate, PiEstimator, ScalarPiEstimator,
        estimate_pi_bulk, estimate_pi_scalar,
    };
}
