//! Curve points and the elliptic-curve group law.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::bits::lsb_to_msb;
use crate::errors::CurveError;
use crate::modular::invert_mod_prime;
use crate::weierstrass::Curve;

/// Either the identity element or an affine coordinate pair.
///
/// The identity is a tagged variant of its own, never a sentinel
/// coordinate pair, so the group law matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Coords {
    Identity,
    Affine { x: BigInt, y: BigInt },
}

/// A point on a [`Curve`]: the identity element (the point at infinity)
/// or a validated affine pair `(x, y)` with `0 <= x, y < p`.
///
/// Points hold a shared reference to their curve and are immutable.
/// Every group operation returns a new point and is closed over the set
/// of valid points, so a live `Point` never needs re-validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    coords: Coords,
    curve: Arc<Curve>,
}

impl Point {
    /// Creates the point `(x, y)` on `curve`.
    ///
    /// Coordinates are first reduced into `[0, p)`; construction fails
    /// when the reduced pair does not satisfy the curve equation.
    pub fn new(x: BigInt, y: BigInt, curve: &Arc<Curve>) -> Result<Self, CurveError> {
        let x = x.mod_floor(curve.p());
        let y = y.mod_floor(curve.p());
        if (&y * &y).mod_floor(curve.p()) != curve.rhs(&x) {
            return Err(CurveError::PointNotOnCurve { x, y });
        }
        Ok(Self::affine_unchecked(x, y, curve))
    }

    /// The identity element of `curve`.
    pub fn identity(curve: &Arc<Curve>) -> Self {
        Point {
            coords: Coords::Identity,
            curve: Arc::clone(curve),
        }
    }

    /// Builds an affine point from coordinates already known to satisfy
    /// the curve equation (group-law results, roots from `compute_y`).
    pub(crate) fn affine_unchecked(x: BigInt, y: BigInt, curve: &Arc<Curve>) -> Self {
        Point {
            coords: Coords::Affine { x, y },
            curve: Arc::clone(curve),
        }
    }

    /// True only for the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self.coords, Coords::Identity)
    }

    /// The x-coordinate; `None` for the identity.
    pub fn x(&self) -> Option<&BigInt> {
        match &self.coords {
            Coords::Identity => None,
            Coords::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate; `None` for the identity.
    pub fn y(&self) -> Option<&BigInt> {
        match &self.coords {
            Coords::Identity => None,
            Coords::Affine { y, .. } => Some(y),
        }
    }

    /// The curve this point lives on.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Re-checks curve membership.
    ///
    /// Group operations are closed, so this holds for every constructed
    /// point; it exists for callers that want to assert closure.
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            Coords::Identity => true,
            Coords::Affine { x, y } => {
                (y * y).mod_floor(self.curve.p()) == self.curve.rhs(x)
            }
        }
    }

    /// The group law.
    ///
    /// `P + O = P` and `O + Q = Q`; adding a point to its negation gives
    /// the identity (vertical chord); equal points delegate to
    /// [`Point::double`]; distinct x-coordinates use the chord slope
    /// `(y2 - y1) / (x2 - x1)`. Fails only when the points belong to
    /// curves with different `(a, b, p)`.
    pub fn add(&self, other: &Point) -> Result<Point, CurveError> {
        if *self.curve != *other.curve {
            return Err(CurveError::CurveMismatch);
        }
        Ok(self.add_on_common_curve(other))
    }

    /// Point doubling via the tangent slope `(3x^2 + a) / (2y)`.
    ///
    /// Doubling a point with `y = 0` gives the identity (the tangent is
    /// vertical), and doubling the identity gives the identity.
    pub fn double(&self) -> Point {
        let p = self.curve.p();
        let (x1, y1) = match &self.coords {
            Coords::Identity => return self.clone(),
            Coords::Affine { x, y } => (x, y),
        };
        if y1.is_zero() {
            return Point::identity(&self.curve);
        }
        let numerator = BigInt::from(3) * x1 * x1 + self.curve.a();
        let lambda = (numerator * invert_mod_prime(&(BigInt::from(2) * y1), p)).mod_floor(p);
        self.chord_result(&lambda, x1, y1, x1)
    }

    /// The group inverse `(x, p - y)`; the identity is its own inverse.
    pub fn negate(&self) -> Point {
        match &self.coords {
            Coords::Identity => self.clone(),
            Coords::Affine { x, y } => Point::affine_unchecked(
                x.clone(),
                (self.curve.p() - y).mod_floor(self.curve.p()),
                &self.curve,
            ),
        }
    }

    /// Scalar multiplication `k * P` by double-and-add over the bits of
    /// `k`, least significant first.
    ///
    /// `k = 0` gives the identity; a negative `k` computes `|k| * (-P)`.
    pub fn scalar_mul(&self, k: &BigInt) -> Point {
        if k.is_negative() {
            return self.negate().scalar_mul(&-k);
        }
        let mut result = Point::identity(&self.curve);
        let mut addend = self.clone();
        for bit in lsb_to_msb(k.magnitude()) {
            if bit {
                result = result.add_on_common_curve(&addend);
            }
            addend = addend.double();
        }
        result
    }

    fn add_on_common_curve(&self, other: &Point) -> Point {
        let p = self.curve.p();
        let (x1, y1) = match &self.coords {
            Coords::Identity => return other.clone(),
            Coords::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match &other.coords {
            Coords::Identity => return self.clone(),
            Coords::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            // Same x, distinct y: the points are inverses.
            return Point::identity(&self.curve);
        }

        let lambda = ((y2 - y1) * invert_mod_prime(&(x2 - x1), p)).mod_floor(p);
        self.chord_result(&lambda, x1, y1, x2)
    }

    // x3 = lambda^2 - x1 - x2, y3 = lambda * (x1 - x3) - y1
    fn chord_result(&self, lambda: &BigInt, x1: &BigInt, y1: &BigInt, x2: &BigInt) -> Point {
        let p = self.curve.p();
        let x3 = (lambda * lambda - x1 - x2).mod_floor(p);
        let y3 = (lambda * (x1 - &x3) - y1).mod_floor(p);
        Point::affine_unchecked(x3, y3, &self.curve)
    }
}

impl PartialEq for Point {
    /// Points are equal when their coordinates match (or both are the
    /// identity) and their curves have equal `(a, b, p)`. Curves are
    /// compared by value, so points on independently built but identical
    /// curves compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords && *self.curve == *other.curve
    }
}

impl Eq for Point {}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Add for &Point {
    type Output = Point;

    /// Panics when the operands belong to different curves; use
    /// [`Point::add`] for the checked form.
    fn add(self, rhs: &Point) -> Point {
        Point::add(self, rhs).expect("cannot add points on different curves")
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        &self + &rhs
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for &Point {
    type Output = Point;

    /// `P - Q` is `P + (-Q)`. Panics when the operands belong to
    /// different curves.
    fn sub(self, rhs: &Point) -> Point {
        self + &rhs.negate()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        &self - &rhs
    }
}

impl Mul<&BigInt> for &Point {
    type Output = Point;

    fn mul(self, rhs: &BigInt) -> Point {
        self.scalar_mul(rhs)
    }
}

impl Mul<BigInt> for &Point {
    type Output = Point;

    fn mul(self, rhs: BigInt) -> Point {
        self.scalar_mul(&rhs)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Coords::Identity => write!(f, "O"),
            Coords::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y^2 = x^3 - 4x over GF(191), with (146, 131) a generator of the
    // order-96 subgroup.
    fn curve191() -> Arc<Curve> {
        Arc::new(
            Curve::new(BigInt::from(-4), BigInt::from(0), BigInt::from(191))
                .expect("valid curve"),
        )
    }

    fn curve97() -> Arc<Curve> {
        Arc::new(
            Curve::new(BigInt::from(2), BigInt::from(3), BigInt::from(97))
                .expect("valid curve"),
        )
    }

    fn point(curve: &Arc<Curve>, x: i64, y: i64) -> Point {
        Point::new(BigInt::from(x), BigInt::from(y), curve).expect("point on curve")
    }

    #[test]
    fn test_construction_validates_membership() {
        let curve = curve191();
        assert!(Point::new(BigInt::from(3), BigInt::from(46), &curve).is_ok());

        let err = Point::new(BigInt::from(3), BigInt::from(47), &curve).unwrap_err();
        assert!(matches!(err, CurveError::PointNotOnCurve { .. }));
    }

    #[test]
    fn test_coordinates_are_reduced() {
        let curve = curve191();
        // 194 = 3 and 237 = 46 (mod 191)
        let p = Point::new(BigInt::from(194), BigInt::from(237), &curve).expect("point on curve");
        assert_eq!(p, point(&curve, 3, 46));
    }

    #[test]
    fn test_accessors() {
        let curve = curve191();
        let p = point(&curve, 3, 46);
        assert_eq!(p.x(), Some(&BigInt::from(3)));
        assert_eq!(p.y(), Some(&BigInt::from(46)));
        assert_eq!(p.curve().as_ref(), curve.as_ref());
        assert!(!p.is_identity());
        assert!(p.is_on_curve());

        let o = Point::identity(&curve);
        assert_eq!(o.x(), None);
        assert_eq!(o.y(), None);
        assert!(o.is_identity());
        assert!(o.is_on_curve());
    }

    #[test]
    fn test_identity_laws() {
        let curve = curve191();
        let p = point(&curve, 3, 46);
        let o = Point::identity(&curve);

        assert_eq!(&p + &o, p);
        assert_eq!(&o + &p, p);
        assert_eq!(&o + &o, o);
        assert_eq!(&p - &p, o);
        assert_eq!(&p.negate() + &p, o);
    }

    #[test]
    fn test_negation() {
        let curve = curve191();
        let p = point(&curve, 3, 46);
        assert_eq!(-&p, point(&curve, 3, 145));
        assert_eq!(p.negate().negate(), p);

        let o = Point::identity(&curve);
        assert_eq!(-&o, o);
    }

    #[test]
    fn test_add_known_vectors() {
        let curve = curve191();
        let p = point(&curve, 3, 46);
        let g = point(&curve, 146, 131);

        assert_eq!(&p + &g, point(&curve, 87, 55));
        assert_eq!(p.double(), point(&curve, 6, 1));
        assert_eq!(g.double(), point(&curve, 8, 174));
    }

    #[test]
    fn test_double_matches_self_addition() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        assert_eq!(g.double(), &g + &g);
    }

    #[test]
    fn test_double_with_zero_y_is_identity() {
        let curve = curve191();
        // x^3 - 4x = x(x - 2)(x + 2), so (2, 0) lies on the curve.
        let p = point(&curve, 2, 0);
        assert!(p.double().is_identity());
        assert!((&p + &p).is_identity());
    }

    #[test]
    fn test_closure_over_generated_points() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        for d in 3..28 {
            let dg = g.scalar_mul(&BigInt::from(d));
            assert!(dg.is_on_curve(), "{d}G left the curve");
        }
    }

    #[test]
    fn test_scalar_mul_small_cases() {
        let curve = curve191();
        let g = point(&curve, 146, 131);

        assert!(g.scalar_mul(&BigInt::from(0)).is_identity());
        assert_eq!(g.scalar_mul(&BigInt::from(1)), g);
        assert_eq!(g.scalar_mul(&BigInt::from(2)), g.double());
        assert_eq!(g.scalar_mul(&BigInt::from(3)), point(&curve, 137, 161));
    }

    #[test]
    fn test_scalar_mul_matches_repeated_addition() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        let mut acc = Point::identity(&curve);
        for k in 0..20 {
            assert_eq!(g.scalar_mul(&BigInt::from(k)), acc);
            acc = &acc + &g;
        }
    }

    #[test]
    fn test_order_wraparound() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        let order = BigInt::from(96); // (p + 1) / 2

        assert!(g.scalar_mul(&order).is_identity());
        assert_eq!(g.scalar_mul(&BigInt::from(97)), g);
    }

    #[test]
    fn test_negative_scalar() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        assert_eq!(g.scalar_mul(&BigInt::from(-1)), -&g);
        assert_eq!(
            g.scalar_mul(&BigInt::from(-5)),
            g.scalar_mul(&BigInt::from(5)).negate()
        );
    }

    #[test]
    fn test_mul_operator() {
        let curve = curve191();
        let g = point(&curve, 146, 131);
        assert_eq!(&g * &BigInt::from(3), g.scalar_mul(&BigInt::from(3)));
        assert_eq!(&g * BigInt::from(7), g.scalar_mul(&BigInt::from(7)));
    }

    #[test]
    fn test_cross_curve_addition_fails() {
        let p = point(&curve191(), 3, 46);
        let q = Point::identity(&curve97());
        assert_eq!(p.add(&q).unwrap_err(), CurveError::CurveMismatch);
    }

    #[test]
    fn test_equality_is_curve_relative() {
        let curve = curve191();
        let same = curve191(); // distinct Arc, equal parameters
        assert_eq!(point(&curve, 3, 46), point(&same, 3, 46));
        assert_eq!(Point::identity(&curve), Point::identity(&same));
        assert_ne!(Point::identity(&curve), Point::identity(&curve97()));
        assert_ne!(point(&curve, 3, 46), point(&curve, 3, 145));
    }

    #[test]
    fn test_display() {
        let curve = curve191();
        assert_eq!(point(&curve, 3, 46).to_string(), "(3, 46)");
        assert_eq!(Point::identity(&curve).to_string(), "O");
    }
}
