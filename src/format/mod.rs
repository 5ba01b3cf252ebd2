//! Text format for salted hashes.
//!
//! An encoded hash is `<salt>.<key>`, each half standard base64 with padding.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use zeroize::Zeroize;

use crate::crypto::{KEY_LEN, SALT_LEN};
use crate::error::FormatError;

/// Separator between the salt and key halves.
pub const SEPARATOR: char = '.';

/// A salt and the key derived from it.
///
/// `Display` renders the `<salt_b64>.<key_b64>` form; `FromStr` parses it
/// back. Both byte arrays are wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedHash {
    salt: [u8; SALT_LEN],
    key: [u8; KEY_LEN],
}

impl Drop for EncodedHash {
    fn drop(&mut self) {
        self.salt.zeroize();
        self.key.zeroize();
    }
}

impl EncodedHash {
    pub fn new(salt: [u8; SALT_LEN], key: [u8; KEY_LEN]) -> Self {
        Self { salt, key }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn salt_b64(&self) -> String {
        BASE64.encode(self.salt)
    }

    pub fn key_b64(&self) -> String {
        BASE64.encode(self.key)
    }
}

// Keep key material out of debug output.
impl fmt::Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedHash")
            .field("salt", &self.salt_b64())
            .field("key", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.salt_b64(), self.key_b64())
    }
}

impl FromStr for EncodedHash {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (salt_part, key_part) = s
            .split_once(SEPARATOR)
            .ok_or(FormatError::MissingSeparator)?;

        if key_part.contains(SEPARATOR) {
            return Err(FormatError::TooManySeparators);
        }

        Ok(Self {
            salt: decode_fixed("salt", salt_part)?,
            key: decode_fixed("hash", key_part)?,
        })
    }
}

fn decode_fixed<const N: usize>(part: &'static str, text: &str) -> Result<[u8; N], FormatError> {
    let mut bytes = BASE64
        .decode(text)
        .map_err(|e| FormatError::InvalidBase64 {
            part,
            reason: e.to_string(),
        })?;

    let actual = bytes.len();
    let out: Result<[u8; N], _> = bytes.as_slice().try_into();
    bytes.zeroize();

    out.map_err(|_| FormatError::InvalidLength {
        part,
        expected: N,
        actual,
    })
}
