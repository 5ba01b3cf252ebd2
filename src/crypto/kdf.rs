use anyhow::{Context, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::debug;

use super::{DEFAULT_ITERATIONS, KEY_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32) -> anyhow::Result<Self> {
        let params = Self { iterations };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.iterations < 1 {
            anyhow::bail!("pbkdf2 iteration count must be >= 1");
        }
        Ok(())
    }
}

/// Derive a 32-byte key from a password with PBKDF2-HMAC-SHA256.
pub fn derive_key(password: &str, salt: &[u8], kdf: KdfParams) -> Result<[u8; KEY_LEN]> {
    kdf.validate().context("invalid PBKDF2 parameters")?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, kdf.iterations, &mut key);

    debug!(iterations = kdf.iterations, "derived pbkdf2-hmac-sha256 key");
    Ok(key)
}
