//! Error types for curve construction and the group law.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by curve and point construction and by point arithmetic.
///
/// Construction errors are permanent for the given inputs: the arithmetic
/// is deterministic, so retrying a failed construction is meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The field modulus failed the primality test.
    #[error("modulus {0} is not prime")]
    CompositeModulus(BigInt),

    /// The discriminant `4a^3 + 27b^2` vanishes mod `p`, so the curve is
    /// singular and the group law is undefined.
    #[error("curve is singular: 4a^3 + 27b^2 = 0 (mod {0})")]
    SingularCurve(BigInt),

    /// The coordinates do not satisfy the curve equation.
    #[error("point ({x}, {y}) is not on the curve")]
    PointNotOnCurve { x: BigInt, y: BigInt },

    /// `gcd(value, modulus) != 1`, so no modular inverse exists.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigInt, modulus: BigInt },

    /// Two points from curves with different `(a, b, p)` were combined.
    #[error("points belong to different curves")]
    CurveMismatch,
}
