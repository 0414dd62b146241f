//! Textbook RSA over arbitrary-precision integers.
//!
//! This crate implements raw RSA: modular-exponentiation encryption with
//! neither padding nor nonce, and CRT-based decryption following
//! RFC 8017 §5.1.2. Key material is derived from two primes using the
//! number-theory primitives of the `curve` crate (modular inverse and
//! LCM), with the private exponent taken modulo the Carmichael function
//! `λ(N) = lcm(p - 1, q - 1)`.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use rsa::PrivateKey;
//!
//! let private = PrivateKey::new(BigInt::from(61), BigInt::from(53)).expect("key derivation");
//! let public = private.public_key();
//!
//! let message = BigInt::from(65);
//! let ciphertext = public.encrypt(&message).expect("encrypt");
//! assert_eq!(private.decrypt(&ciphertext).expect("decrypt"), message);
//! ```
//!
//! # Security Considerations
//!
//! Raw RSA is deterministic and malleable; without padding it is not
//! semantically secure. This crate is a teaching artifact for the
//! arithmetic of the scheme and must never protect real data.

mod errors;
mod keys;


pub use errors::RsaError;
pub use keys::{PrivateKey, PublicKey};
