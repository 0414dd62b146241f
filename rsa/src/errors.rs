//! Error types for RSA key derivation and raw encryption.

use curve::CurveError;
use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised during key derivation, encryption, and decryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// A key factor failed the primality test.
    #[error("factor {0} is not prime")]
    NotPrime(BigInt),

    /// A modular inverse required for the key material does not exist
    /// for the chosen public exponent.
    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] CurveError),

    /// Messages must be non-negative integers.
    #[error("positive messages only")]
    NegativeMessage,

    /// The message does not fit below the modulus.
    #[error("message too big")]
    MessageTooLarge,

    /// The ciphertext lies outside `[1, N)`.
    #[error("ciphertext is out of range")]
    CiphertextOutOfRange,
}
