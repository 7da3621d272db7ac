//! Truncated Fourier-cosine series for one axis of a conduction-cooled slab.
//!
//! For a slab of half-width `X` held at a fixed surface temperature, the
//! dimensionless temperature at distance `x` from the mid-plane is
//!
//! ```text
//! θ(x, t) = 4/π · Σ_{n≥0} (-1)^n / (2n+1) · cos((2n+1) π x / 2X) · exp(-α t (2n+1)² / 4X²)
//! ```
//!
//! The sum is truncated at a fixed number of terms. An optional tolerance lets
//! callers stop earlier once the term envelope falls below it; the fixed count is
//! always the upper bound.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::{NumericResult, require_nonzero_count, require_positive};

/// Default truncation depth of the series.
pub const DEFAULT_SERIES_TERMS: usize = 1000;

const FOUR_OVER_PI: f64 = 4.0 / PI;

/// Truncation controls for [`axis_theta_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Maximum number of terms summed.
    pub terms: usize,
    /// Optional early exit: stop after the first term whose magnitude bound
    /// `4/π · exp(-α t (2n+1)² / 4X²) / (2n+1)` is below this value.
    pub tolerance: Option<f64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SERIES_TERMS,
            tolerance: None,
        }
    }
}

impl SeriesConfig {
    /// Fixed-count truncation at `terms`.
    pub fn new(terms: usize) -> Self {
        Self {
            terms,
            tolerance: None,
        }
    }

    pub fn with_terms(mut self, terms: usize) -> Self {
        self.terms = terms;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn validate(&self) -> NumericResult<()> {
        require_nonzero_count("series terms", self.terms)?;
        if let Some(tol) = self.tolerance {
            require_positive("series tolerance", tol)?;
        }
        Ok(())
    }
}

/// Series value plus the number of terms that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesEvaluation {
    pub theta: f64,
    pub terms_used: usize,
}

/// Decay factor `exp(-α t (2n+1)² / 4X²)` of series term `n`.
///
/// Shrinks as `time` grows for `diffusivity > 0`. Negative `time` or
/// `diffusivity` makes it grow; that is outside the model's domain and is left
/// to the caller.
#[inline]
pub fn term_envelope(n: usize, half_width: f64, time: f64, diffusivity: f64) -> f64 {
    let k = 2.0 * n as f64 + 1.0;
    (-diffusivity * time * k * k / (4.0 * half_width * half_width)).exp()
}

/// Dimensionless temperature θ along one axis, summed over exactly `iterations`
/// terms in index order.
///
/// Fails when `iterations == 0` or `half_width <= 0`.
///
/// ```rust
/// use numkit::conduction::axis_theta;
///
/// // Mid-plane at t = 0 sits at the initial temperature (θ ≈ 1).
/// let theta = axis_theta(1000, 0.0, 1.0, 0.0, 1.0e-6).unwrap();
/// assert!((theta - 1.0).abs() < 1.0e-3);
/// ```
pub fn axis_theta(
    iterations: usize,
    position: f64,
    half_width: f64,
    time: f64,
    diffusivity: f64,
) -> NumericResult<f64> {
    axis_theta_with(
        &SeriesConfig::new(iterations),
        position,
        half_width,
        time,
        diffusivity,
    )
    .map(|eval| eval.theta)
}

/// [`axis_theta`] driven by a [`SeriesConfig`], reporting how many terms were summed.
pub fn axis_theta_with(
    config: &SeriesConfig,
    position: f64,
    half_width: f64,
    time: f64,
    diffusivity: f64,
) -> NumericResult<SeriesEvaluation> {
    config.validate()?;
    require_positive("half_width", half_width)?;

    let phase = FRAC_PI_2 * position / half_width;
    let decay_rate = diffusivity * time / (4.0 * half_width * half_width);

    let mut sum = 0.0;
    let mut terms_used = 0;
    for n in 0..config.terms {
        let k = 2.0 * n as f64 + 1.0;
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let envelope = (-decay_rate * k * k).exp() / k;
        sum += sign * envelope * (k * phase).cos();
        terms_used = n + 1;

        if let Some(tol) = config.tolerance
            && FOUR_OVER_PI * envelope < tol
        {
            break;
        }
    }

    Ok(SeriesEvaluation {
        theta: FOUR_OVER_PI * sum,
        terms_used,
    })
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::core::NumericError;

    #[test]
    fn zero_iterations_is_rejected() {
        let err = axis_theta(0, 0.0, 1.0, 10.0, 1.0e-6).unwrap_err();
        assert!(matches!(err, NumericError::InvalidInput(_)));
    }

    #[test]
    fn non_positive_half_width_is_rejected() {
        for half_width in [0.0, -1.0, f64::NAN] {
            assert!(axis_theta(10, 0.0, half_width, 10.0, 1.0e-6).is_err());
        }
    }

    #[test]
    fn mid_plane_at_time_zero_is_leibniz_series() {
        // 4/π · Σ (-1)^n/(2n+1) → 1, with truncation error below 4/(π(2N+1)).
        let theta = axis_theta(DEFAULT_SERIES_TERMS, 0.0, 1.0, 0.0, 1.0e-6).unwrap();
        assert_abs_diff_eq!(theta, 1.0, epsilon = 4.0 / (PI * 2001.0));

        let coarse = axis_theta(10, 0.0, 1.0, 0.0, 1.0e-6).unwrap();
        assert!((coarse - 1.0).abs() > (theta - 1.0).abs());
    }

    #[test]
    fn surface_stays_at_ambient() {
        for time in [0.0, 60.0, 3600.0] {
            let theta = axis_theta(500, 2.0, 2.0, time, 1.0e-5).unwrap();
            assert_abs_diff_eq!(theta, 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn single_term_matches_closed_form() {
        let (x, half_width, time, alpha) = (0.3, 1.5, 900.0, 2.0e-4);
        let theta = axis_theta(1, x, half_width, time, alpha).unwrap();
        let expected = 4.0 / PI
            * (PI * x / (2.0 * half_width)).cos()
            * (-alpha * time / (4.0 * half_width * half_width)).exp();
        assert_relative_eq!(theta, expected, max_relative = 1.0e-14);
    }

    #[test]
    fn late_time_decays_toward_zero() {
        let early = axis_theta(1000, 0.0, 1.0, 1.0e3, 1.0e-4).unwrap();
        let late = axis_theta(1000, 0.0, 1.0, 1.0e6, 1.0e-4).unwrap();
        assert!(late.abs() < 1.0e-10);
        assert!(early > late);
    }

    #[test]
    fn term_envelope_shrinks_with_time_for_every_index() {
        let times = [0.0, 10.0, 100.0, 1000.0, 10_000.0];
        for n in [0, 1, 5, 50] {
            for pair in times.windows(2) {
                let before = term_envelope(n, 1.0, pair[0], 1.0e-6);
                let after = term_envelope(n, 1.0, pair[1], 1.0e-6);
                assert!(after < before, "n={n} t={pair:?}");
            }
        }
        assert_eq!(term_envelope(3, 1.0, 0.0, 1.0e-6), 1.0);
    }

    #[test]
    fn term_envelope_accepts_indices_past_half_of_usize() {
        // No integer overflow on huge indices; the decay underflows to zero.
        assert_eq!(term_envelope(usize::MAX, 1.0, 1.0, 1.0e-6), 0.0);
        assert_eq!(term_envelope(usize::MAX / 2 + 1, 1.0, 0.0, 1.0e-6), 1.0);
    }

    #[test]
    fn negative_time_is_not_validated() {
        let theta = axis_theta(10, 0.0, 1.0, -100.0, 1.0e-3).unwrap();
        assert!(theta.is_finite());
        assert!(term_envelope(1, 1.0, -100.0, 1.0e-3) > 1.0);
    }

    #[test]
    fn tolerance_ignores_a_vanishing_cosine_term() {
        // At x = X/3 the n = 1 cosine is cos(π/2) = 0; the envelope still
        // exceeds the tolerance there, so summation carries on.
        let config = SeriesConfig::new(1000).with_tolerance(1.0e-3);
        let eval = axis_theta_with(&config, 1.0 / 3.0, 1.0, 0.0, 1.0e-6).unwrap();
        assert!(eval.terms_used > 2, "terms_used = {}", eval.terms_used);
    }

    #[test]
    fn tolerance_stops_early_without_moving_the_result() {
        let fixed = SeriesConfig::default();
        let early = SeriesConfig::default().with_tolerance(1.0e-12);

        let a = axis_theta_with(&fixed, 0.2, 1.0, 3600.0, 1.0e-6).unwrap();
        let b = axis_theta_with(&early, 0.2, 1.0, 3600.0, 1.0e-6).unwrap();

        assert_eq!(a.terms_used, DEFAULT_SERIES_TERMS);
        assert!(b.terms_used < 300, "terms_used = {}", b.terms_used);
        assert_abs_diff_eq!(a.theta, b.theta, epsilon = 1.0e-10);
    }

    #[test]
    fn tolerance_never_exceeds_the_term_cap() {
        // At t = 0 the envelope is 1/(2n+1), so 1e-6 would need ~637k terms.
        let config = SeriesConfig::new(50).with_tolerance(1.0e-6);
        let eval = axis_theta_with(&config, 0.0, 1.0, 0.0, 1.0e-6).unwrap();
        assert_eq!(eval.terms_used, 50);
    }

    #[test]
    fn tolerance_must_be_positive() {
        let config = SeriesConfig::default().with_tolerance(0.0);
        assert!(axis_theta_with(&config, 0.0, 1.0, 1.0, 1.0e-6).is_err());
    }

    #[test]
    fn fixed_count_reports_every_term() {
        let eval = axis_theta_with(&SeriesConfig::new(7), 0.1, 1.0, 5.0, 1.0e-3).unwrap();
        assert_eq!(eval.terms_used, 7);
        assert_eq!(eval.theta, axis_theta(7, 0.1, 1.0, 5.0, 1.0e-3).unwrap());
    }
}
