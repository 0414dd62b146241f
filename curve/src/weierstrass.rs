//! Short Weierstrass curves over prime fields.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::modular::{is_prime, sqrt_mod_p};

/// The curve `y^2 = x^3 + ax + b` over the prime field `GF(p)`.
///
/// Construction validates that `p` is prime and that the curve is
/// non-singular, so every live `Curve` admits a well-defined group law
/// and no method re-checks its receiver. Curves are immutable: build one,
/// wrap it in an `Arc`, and share it between all points on it.
///
/// `a` and `b` are kept exactly as given (not reduced mod `p`) so the
/// textual form can render `- 4x` instead of `187x`; arithmetic reduces
/// them on use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

impl Curve {
    /// Creates the curve `y^2 = x^3 + ax + b (mod p)`.
    ///
    /// Fails when `p` is not prime, or when the discriminant condition
    /// `4a^3 + 27b^2 != 0 (mod p)` is violated (a singular curve, whose
    /// chord-and-tangent law degenerates).
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Result<Self, CurveError> {
        if !is_prime(&p) {
            return Err(CurveError::CompositeModulus(p));
        }
        let discriminant =
            (BigInt::from(4) * &a * &a * &a + BigInt::from(27) * &b * &b).mod_floor(&p);
        if discriminant.is_zero() {
            return Err(CurveError::SingularCurve(p));
        }
        Ok(Curve { a, b, p })
    }

    /// The `a` coefficient, as given at construction.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The `b` coefficient, as given at construction.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// The y-coordinates of the curve points with x-coordinate `x`,
    /// sorted ascending.
    ///
    /// Returns an empty vector when no point with that x lies on the
    /// curve, the single root `0` when `x^3 + ax + b = 0 (mod p)`, and
    /// the symmetric pair otherwise. An empty result is a normal outcome.
    pub fn compute_y(&self, x: &BigInt) -> Vec<BigInt> {
        sqrt_mod_p(&self.rhs(x), &self.p)
    }

    /// `x^3 + ax + b` reduced into `[0, p)`.
    pub(crate) fn rhs(&self, x: &BigInt) -> BigInt {
        (x * x * x + &self.a * x + &self.b).mod_floor(&self.p)
    }
}

impl Display for Curve {
    /// Renders as `y^2 = x^3 - 4x + 0 (mod 191)`: signs are normalized
    /// and the constant term is always shown.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = |v: &BigInt| if v.is_negative() { '-' } else { '+' };
        write!(
            f,
            "y^2 = x^3 {} {}x {} {} (mod {})",
            sign(&self.a),
            self.a.magnitude(),
            sign(&self.b),
            self.b.magnitude(),
            self.p
        )
    }
}
