//! Modular arithmetic over arbitrary-precision integers.
//!
//! These are the number-theory primitives the group law rests on:
//! modular inverse, modular square root, primality and quadratic-residue
//! tests, and the LCM needed by RSA key derivation. Everything works on
//! `BigInt`, so moduli are never assumed to fit a machine word.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::CurveError;

/// Witnesses for Miller-Rabin; also serve as the trial-division primes.
/// This set is a deterministic test for all n below 3.3 * 10^24.
const MILLER_RABIN_WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// The multiplicative inverse of `a` modulo `n`, in the range `[0, n)`.
///
/// Computed with the extended Euclidean algorithm, so `n` may be any
/// modulus greater than one, prime or not. Fails when `gcd(a, n) != 1`,
/// in which case no inverse exists.
pub fn modinv(a: &BigInt, n: &BigInt) -> Result<BigInt, CurveError> {
    let reduced = a.mod_floor(n);
    let extended = reduced.extended_gcd(n);
    if !extended.gcd.is_one() {
        return Err(CurveError::NoInverse {
            value: a.clone(),
            modulus: n.clone(),
        });
    }
    Ok(extended.x.mod_floor(n))
}

/// Least common multiple via `|a * b| / gcd(a, b)`, with `lcm(0, 0) = 0`.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() && b.is_zero() {
        return BigInt::zero();
    }
    (a * b).abs() / a.gcd(b)
}

/// Primality test: trial division by the small witness primes, then
/// Miller-Rabin over the fixed witness set.
///
/// Deterministic (and exact) below 3.3 * 10^24; a strong probabilistic
/// test beyond that, which is all a teaching library needs to reject a
/// composite curve modulus.
pub fn is_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if *n < two {
        return false;
    }
    for witness in MILLER_RABIN_WITNESSES {
        let witness = BigInt::from(witness);
        if *n == witness {
            return true;
        }
        if (n % &witness).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^s * d with d odd
    let n_minus_one = n - BigInt::one();
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for witness in MILLER_RABIN_WITNESSES {
        let mut x = BigInt::from(witness).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Euler's criterion: true when some `y` with `y^2 = x (mod p)` exists.
///
/// Zero counts as a residue (its root is zero). `p` must be prime.
pub fn is_quadratic_residue(x: &BigInt, p: &BigInt) -> bool {
    let x = x.mod_floor(p);
    if x.is_zero() {
        return true;
    }
    let exp = (p - BigInt::one()) >> 1;
    x.modpow(&exp, p).is_one()
}

/// The square roots of `x` modulo the prime `p`, sorted ascending.
///
/// Returns no roots when `x` is a quadratic non-residue, the single root
/// `0` when `x = 0 (mod p)`, and the symmetric pair `{r, p - r}`
/// otherwise. An empty result is a normal outcome, not an error.
///
/// Primes with `p = 3 (mod 4)` use the direct `x^((p+1)/4)`
/// exponentiation; the remaining odd primes go through Tonelli-Shanks.
pub fn sqrt_mod_p(x: &BigInt, p: &BigInt) -> Vec<BigInt> {
    let x = x.mod_floor(p);
    if x.is_zero() {
        return vec![BigInt::zero()];
    }
    let two = BigInt::from(2);
    if *p == two {
        // In GF(2) every element is its own square root.
        return vec![x];
    }
    if !is_quadratic_residue(&x, p) {
        return Vec::new();
    }

    let root = if p % BigInt::from(4) == BigInt::from(3) {
        let exp = (p + BigInt::one()) >> 2;
        x.modpow(&exp, p)
    } else {
        tonelli_shanks(&x, p)
    };

    let other = p - &root;
    if root < other {
        vec![root, other]
    } else {
        vec![other, root]
    }
}

/// Inversion by Fermat's little theorem: `v^(p-2) mod p`.
///
/// Requires `p` prime and `v` nonzero mod `p`; the curve constructor and
/// the group law guarantee both wherever this is called.
pub(crate) fn invert_mod_prime(v: &BigInt, p: &BigInt) -> BigInt {
    let exp = p - BigInt::from(2);
    v.mod_floor(p).modpow(&exp, p)
}

/// Tonelli-Shanks for odd `p` with `p = 1 (mod 4)`. `x` must be a
/// nonzero quadratic residue.
fn tonelli_shanks(x: &BigInt, p: &BigInt) -> BigInt {
    let one = BigInt::one();

    // p - 1 = 2^s * q with q odd
    let p_minus_one = p - &one;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    // Any quadratic non-residue works as the progression seed; half of
    // all values qualify, so a linear scan finds one immediately.
    let mut z = BigInt::from(2);
    while is_quadratic_residue(&z, p) {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = x.modpow(&q, p);
    let mut r = x.modpow(&((&q + &one) >> 1), p);

    while !t.is_one() {
        // Least i in (0, m) with t^(2^i) = 1.
        let mut i = 0u64;
        let mut square = t.clone();
        while !square.is_one() {
            square = (&square * &square).mod_floor(p);
            i += 1;
        }

        let b = c.modpow(&(BigInt::one() << (m - i - 1)), p);
        m = i;
        c = (&b * &b).mod_floor(p);
        t = (&t * &c).mod_floor(p);
        r = (&r * &b).mod_floor(p);
    }
    r
}
