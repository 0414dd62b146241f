//! Birthday-collision estimators.
//!
//! Answers the two classic questions about throwing `n` samples into `d`
//! buckets uniformly at random: the probability that at least two collide
//! ([`pbirthday`]) and the number of samples needed to reach a target
//! collision probability ([`qbirthday`]). Useful for back-of-the-envelope
//! reasoning about hash collisions and small-group key reuse.

use thiserror::Error;

/// Errors raised on out-of-domain estimator inputs.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum BirthdayError {
    /// At least one sample is required.
    #[error("sample count must be positive")]
    ZeroSamples,

    /// At least one bucket is required.
    #[error("bucket count must be positive")]
    ZeroBuckets,

    /// Probabilities live in `(0, 1]`.
    #[error("probability {0} is not in (0, 1]")]
    InvalidProbability(f64),

    /// The sample-count estimate is only implemented for `p <= 1/2`,
    /// the regime where the square-root approximation is accurate.
    #[error("only probabilities up to 1/2 are supported, got {0}")]
    UnsupportedProbability(f64),
}

/// Evaluation strategy for [`pbirthday`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Exact below [`EXACT_THRESHOLD`] samples, approximate beyond.
    #[default]
    Auto,
    /// Exact falling-factorial product; slow for very large `n`.
    Exact,
    /// `1 - exp(-n^2 / 2d)`; cheap at any size.
    Approximate,
}

/// Sample count at which [`Mode::Auto`] switches to the approximation.
pub const EXACT_THRESHOLD: u64 = 1000;

/// Probability of at least one collision among `n` samples drawn
/// uniformly from `d` buckets.
///
/// `n >= d` forces a collision by pigeonhole and returns exactly 1.
pub fn pbirthday(n: u64, d: u64, mode: Mode) -> Result<f64, BirthdayError> {
    if n == 0 {
        return Err(BirthdayError::ZeroSamples);
    }
    if d == 0 {
        return Err(BirthdayError::ZeroBuckets);
    }
    let p = match mode {
        Mode::Exact => exact(n, d),
        Mode::Approximate => approximate(n, d),
        Mode::Auto if n < EXACT_THRESHOLD => exact(n, d),
        Mode::Auto => approximate(n, d),
    };
    Ok(p)
}

/// Minimum number of samples over `d` buckets for a collision
/// probability of at least `p`: `ceil(sqrt(2d * ln(1/(1-p))))`.
pub fn qbirthday(p: f64, d: u64) -> Result<u64, BirthdayError> {
    if !(p > 0.0 && p <= 1.0) {
        return Err(BirthdayError::InvalidProbability(p));
    }
    if p > 0.5 {
        return Err(BirthdayError::UnsupportedProbability(p));
    }
    if d == 0 {
        return Err(BirthdayError::ZeroBuckets);
    }
    let n = (2.0 * d as f64 * (1.0 / (1.0 - p)).ln()).sqrt();
    Ok(n.ceil() as u64)
}

// 1 - d!/((d-n)! * d^n), as an incremental product so the factorials
// never leave f64 range.
fn exact(n: u64, d: u64) -> f64 {
    if n >= d {
        return 1.0;
    }
    let d = d as f64;
    let mut no_collision = 1.0;
    for i in 0..n {
        no_collision *= (d - i as f64) / d;
    }
    1.0 - no_collision
}

fn approximate(n: u64, d: u64) -> f64 {
    if n >= d {
        return 1.0;
    }
    let n = n as f64;
    1.0 - (-(n * n) / (2.0 * d as f64)).exp()
}
