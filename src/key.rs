use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand_core::{OsRng, RngCore};

use crate::error::CipherError;

/// Key length in bytes.
pub const KEY_BYTES: usize = 128 / 8;

/// A 128-bit cipher key.
///
/// The engine only accepts keys that decode to exactly [`KEY_BYTES`] raw
/// bytes; anything else (for example a caller passing a username string
/// directly as key material) is rejected with [`CipherError::KeyFormat`].
/// Deriving real key material from user identity is the caller's concern.
#[cfg_attr(test, derive(PartialEq, Eq, Debug))]
#[derive(Clone)]
pub struct Key(pub(crate) [u8; KEY_BYTES]);

impl Key {
    /// Draws a fresh key from the operating system's secure random source.
    ///
    /// # Errors
    /// Returns [`CipherError::Entropy`] if the source is unavailable.
    pub fn generate() -> Result<Self, CipherError> {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(CipherError::Entropy)?;
        Ok(Self(bytes))
    }

    /// Decodes a transport-encoded key string.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyFormat`] if the string is not valid
    /// transport encoding or does not decode to exactly [`KEY_BYTES`] bytes.
    pub fn from_transport(encoded: &str) -> Result<Self, CipherError> {
        let bytes = STANDARD.decode(encoded).map_err(|_| CipherError::KeyFormat)?;
        let bytes: [u8; KEY_BYTES] = bytes.try_into().map_err(|_| CipherError::KeyFormat)?;
        Ok(Self(bytes))
    }

    /// Encodes the raw key bytes as a transport-safe string.
    pub fn to_transport(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl From<[u8; KEY_BYTES]> for Key {
    fn from(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }
}
