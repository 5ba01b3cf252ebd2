mod crypto;
mod error;
mod format;

pub use crate::crypto::{DEFAULT_ITERATIONS, KEY_LEN, KdfParams, SALT_LEN};
pub use crate::error::FormatError;
pub use crate::format::{EncodedHash, SEPARATOR};
use anyhow::{Context, Result};

/// Produces salted PBKDF2-HMAC-SHA256 hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    kdf: KdfParams,
}

impl PasswordHasher {
    pub fn new(kdf: KdfParams) -> Self {
        Self { kdf }
    }

    pub fn kdf(&self) -> &KdfParams {
        &self.kdf
    }

    /// Hashes `password` under `salt`, or under a fresh random salt when
    /// none is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS random source is unavailable.
    pub fn hash(&self, password: &str, salt: Option<[u8; SALT_LEN]>) -> Result<EncodedHash> {
        let salt = match salt {
            Some(salt) => salt,
            None => crypto::generate_salt().context("failed to generate salt")?,
        };

        let key = crypto::derive_key(password, &salt, self.kdf)
            .context("failed to derive password hash")?;

        Ok(EncodedHash::new(salt, key))
    }
}

/// Returns `<salt_b64>.<hash_b64>` for `password` with the default parameters.
pub fn generate_hash(password: &str, salt: Option<[u8; SALT_LEN]>) -> Result<String> {
    Ok(PasswordHasher::default().hash(password, salt)?.to_string())
}
