use thiserror::Error;

/// Errors produced by the cipher engine.
///
/// All variants are recoverable and reported to the caller; the engine
/// never aborts and never retries (every operation is deterministic, so a
/// retry would reproduce the same failure).
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key string is not valid transport encoding, or does not decode
    /// to exactly [`KEY_BYTES`](crate::KEY_BYTES) bytes.
    #[error("key does not decode to exactly 16 bytes")]
    KeyFormat,

    /// The ciphertext is not valid transport encoding, or decodes to a
    /// byte length that is not a multiple of the 8-byte block size.
    #[error("ciphertext is not valid transport encoding or is not block-aligned")]
    Decode,

    /// The decrypted (zero-padded) bytes are not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The operating system's secure random source is unavailable.
    #[error("entropy source unavailable")]
    Entropy(#[source] rand_core::Error),
}
