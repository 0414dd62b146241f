//! Random sampling of curve points.

use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use rand::Rng;

use crate::point::Point;
use crate::weierstrass::Curve;

impl Point {
    /// Samples a random affine point on `curve`.
    ///
    /// Rejection-samples x-coordinates until one admits a square root,
    /// then picks one of the roots with a coin flip. Never returns the
    /// identity.
    pub fn random<R: Rng + ?Sized>(curve: &Arc<Curve>, rng: &mut R) -> Point {
        loop {
            let x = BigInt::from(random_below(curve.p().magnitude(), rng));
            let mut roots = curve.compute_y(&x);
            if roots.is_empty() {
                continue;
            }
            let index = if roots.len() == 2 && rng.random::<bool>() {
                1
            } else {
                0
            };
            let y = roots.swap_remove(index);
            return Point::affine_unchecked(x, y, curve);
        }
    }
}

/// Uniform sample from `[0, bound)` by rejection on the top bits.
fn random_below<R: Rng + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    let bits = bound.bits();
    let nbytes = bits.div_ceil(8) as usize;
    let top_bits = (bits % 8) as u32;
    let mask: u8 = if top_bits == 0 {
        0xff
    } else {
        (1u8 << top_bits) - 1
    };

    let mut bytes = vec![0u8; nbytes];
    loop {
        rng.fill(&mut bytes[..]);
        bytes[nbytes - 1] &= mask;
        let candidate = BigUint::from_bytes_le(&bytes);
        if candidate < *bound {
            return candidate;
        }
    }
}
