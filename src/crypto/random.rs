use super::SALT_LEN;
use anyhow::{Result, anyhow};
use getrandom::fill;
use tracing::debug;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|e| anyhow!("OS random generator unavailable: {e}"))
}

/// Generate salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    secure_random(&mut salt)?;
    debug!(len = SALT_LEN, "generated random salt");
    Ok(salt)
}
