//! Core error type and input-validation helpers shared by every kernel.
//!
//! All public operations validate their arguments up front and return
//! [`NumericError::InvalidInput`] before any computation starts. Floating-point
//! overflow or NaN produced *during* a computation is not an error; it propagates
//! as the IEEE-754 result.

/// Errors surfaced by the numerical kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Input validation error.
    InvalidInput(String),
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Library-wide result alias.
pub type NumericResult<T> = Result<T, NumericError>;

/// Rejects `value <= 0` and NaN.
#[inline]
pub fn require_positive(name: &str, value: f64) -> NumericResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(NumericError::InvalidInput(format!(
            "{name} must be > 0 (got {value})"
        )))
    }
}

/// Rejects a zero count.
#[inline]
pub fn require_nonzero_count(name: &str, n: usize) -> NumericResult<usize> {
    if n == 0 {
        return Err(NumericError::InvalidInput(format!("{name} must be >= 1")));
    }
    Ok(n)
}
