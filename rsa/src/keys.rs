//! RSA key material: raw encryption and CRT decryption.

use curve::{is_prime, lcm, modinv};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use serde::{Deserialize, Serialize};

use crate::errors::RsaError;

/// An RSA public key `(N, e)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    n: BigInt,
    e: BigInt,
}

impl PublicKey {
    /// Builds a public key from the modulus and public exponent.
    pub fn new(n: BigInt, e: BigInt) -> Self {
        PublicKey { n, e }
    }

    /// The public modulus `N`.
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    /// The public exponent `e`.
    pub fn e(&self) -> &BigInt {
        &self.e
    }

    /// Raw encryption with neither padding nor nonce: `m^e mod N`.
    ///
    /// The message must be a non-negative integer below the modulus.
    pub fn encrypt(&self, message: &BigInt) -> Result<BigInt, RsaError> {
        if message.is_negative() {
            return Err(RsaError::NegativeMessage);
        }
        if *message >= self.n {
            return Err(RsaError::MessageTooLarge);
        }
        Ok(message.modpow(&self.e, &self.n))
    }
}

/// An RSA private key derived from the primes `p` and `q`.
///
/// Alongside the private exponent `d = e^-1 mod λ(N)` (with `λ` the
/// Carmichael function `lcm(p - 1, q - 1)`), the key holds the CRT
/// exponents `dP = e^-1 mod (p - 1)`, `dQ = e^-1 mod (q - 1)` and the
/// coefficient `qInv = q^-1 mod p` used by [`PrivateKey::decrypt`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    p: BigInt,
    q: BigInt,
    d: BigInt,
    dp: BigInt,
    dq: BigInt,
    qinv: BigInt,
    public: PublicKey,
}

impl PrivateKey {
    /// The conventional public exponent, `2^16 + 1`.
    pub const DEFAULT_EXPONENT: u32 = 65537;

    /// Builds a private key from two primes with the default public
    /// exponent.
    pub fn new(p: BigInt, q: BigInt) -> Result<Self, RsaError> {
        Self::with_exponent(p, q, BigInt::from(Self::DEFAULT_EXPONENT))
    }

    /// Builds a private key from two primes and an explicit public
    /// exponent.
    ///
    /// Fails when either factor is composite, or when `e` has no inverse
    /// modulo `p - 1`, `q - 1`, or `λ(N)`. All validation happens here:
    /// a constructed key always decrypts what its public half encrypts.
    pub fn with_exponent(p: BigInt, q: BigInt, e: BigInt) -> Result<Self, RsaError> {
        if !is_prime(&p) {
            return Err(RsaError::NotPrime(p));
        }
        if !is_prime(&q) {
            return Err(RsaError::NotPrime(q));
        }

        let one = BigInt::one();
        let n = &p * &q;
        let dp = modinv(&e, &(&p - &one))?;
        let dq = modinv(&e, &(&q - &one))?;
        let qinv = modinv(&q, &p)?;
        let carmichael = lcm(&(&p - &one), &(&q - &one));
        let d = modinv(&e, &carmichael)?;

        Ok(PrivateKey {
            public: PublicKey::new(n, e),
            p,
            q,
            d,
            dp,
            dq,
            qinv,
        })
    }

    /// The public half of this key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The public exponent `e`.
    pub fn e(&self) -> &BigInt {
        self.public.e()
    }

    /// The private exponent `d`.
    ///
    /// Decryption goes through the CRT form instead; `d` is exposed so
    /// callers can cross-check against the direct `c^d mod N`.
    pub fn d(&self) -> &BigInt {
        &self.d
    }

    /// Decrypts a ciphertext via the CRT (RFC 8017 §5.1.2).
    ///
    /// The ciphertext must lie in `[1, N)`.
    pub fn decrypt(&self, ciphertext: &BigInt) -> Result<BigInt, RsaError> {
        if !ciphertext.is_positive() || *ciphertext >= *self.public.n() {
            return Err(RsaError::CiphertextOutOfRange);
        }

        let m1 = ciphertext.modpow(&self.dp, &self.p);
        let m2 = ciphertext.modpow(&self.dq, &self.q);
        let h = ((m1 - &m2) * &self.qinv).mod_floor(&self.p);

        Ok(m2 + &self.q * h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The (61, 53, 17) textbook example: N = 3233, λ = 780.
    #[test]
    fn test_crt_key_material() {
        let key =
            PrivateKey::with_exponent(BigInt::from(61), BigInt::from(53), BigInt::from(17))
                .expect("key derivation");
        assert_eq!(key.public.n, BigInt::from(3233));
        assert_eq!(key.d, BigInt::from(413));
        assert_eq!(key.dp, BigInt::from(53));
        assert_eq!(key.dq, BigInt::from(49));
        assert_eq!(key.qinv, BigInt::from(38));
    }
}
