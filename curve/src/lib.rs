//! Elliptic curve groups over prime fields, in arbitrary precision.
//!
//! This crate provides short Weierstrass curves with runtime parameters,
//! validated affine points, the chord-and-tangent group law, and the
//! number-theory primitives the group law rests on (modular inverse,
//! modular square root, primality testing). It is a teaching library:
//! clarity over speed, variable-time arithmetic, and no side-channel
//! hardening whatsoever.

mod bits;
mod errors;
mod modular;
mod point;
mod random;
mod weierstrass;

pub use bits::lsb_to_msb;
pub use errors::CurveError;
pub use modular::{is_prime, is_quadratic_residue, lcm, modinv, sqrt_mod_p};
pub use point::Point;
pub use weierstrass::Curve;
