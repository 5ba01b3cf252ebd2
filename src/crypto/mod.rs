//! Cryptographic primitives for password hashing.
//!
//! Provides salt generation and PBKDF2-HMAC-SHA256 key derivation.

pub mod kdf;
pub mod random;

pub use kdf::{KdfParams, derive_key};
pub use random::generate_salt;

/// Length of the salt (16 bytes / 128 bits).
pub const SALT_LEN: usize = 16;
/// Length of the derived key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// PBKDF2 iteration count used unless the caller picks another.
pub const DEFAULT_ITERATIONS: u32 = 100_000;
