//! The public façade: key generation, encrypt, decrypt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::block::{decrypt_block, encrypt_block, BLOCK_BYTES};
use crate::codec::{bytes_to_words, words_to_bytes};
use crate::error::CipherError;
use crate::key::Key;
use crate::schedule::{expand, SubkeyTable};

/// Generates a fresh random key, transport-encoded.
///
/// # Errors
/// Returns [`CipherError::Entropy`] if the OS secure random source is
/// unavailable. This never degrades to a weaker source.
pub fn generate_key() -> Result<String, CipherError> {
    Ok(Key::generate()?.to_transport())
}

/// Encrypts `plaintext` under the transport-encoded 16-byte `key` and
/// returns the transport-encoded ciphertext.
///
/// Each 8-byte block is transformed independently with no chaining and no
/// IV, so the output is deterministic: the same plaintext and key always
/// produce the same ciphertext, and identical plaintext blocks produce
/// identical ciphertext blocks. The surrounding service relies on this for
/// reproducible storage.
///
/// # Errors
/// Returns [`CipherError::KeyFormat`] if `key` does not decode to exactly
/// 16 bytes.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    let key = Key::from_transport(key)?;
    let table = expand(&key);

    let mut words = bytes_to_words(plaintext.as_bytes());
    transform_blocks(&mut words, &table, encrypt_block);

    Ok(STANDARD.encode(words_to_bytes(&words)))
}

/// Decrypts transport-encoded `ciphertext` under the transport-encoded
/// 16-byte `key`.
///
/// No length metadata is stored with the ciphertext, so an input whose
/// UTF-8 length was not a multiple of 8 comes back with its trailing zero
/// padding intact: the result is the original text followed by NUL bytes.
/// Trimming is left to the caller.
///
/// # Errors
/// [`CipherError::KeyFormat`] if `key` does not decode to exactly 16
/// bytes; [`CipherError::Decode`] if `ciphertext` is not valid transport
/// encoding or is not block-aligned; [`CipherError::Encoding`] if the
/// decrypted bytes are not valid UTF-8.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    let key = Key::from_transport(key)?;
    let table = expand(&key);

    let bytes = STANDARD
        .decode(ciphertext)
        .map_err(|_| CipherError::Decode)?;
    if bytes.len() % BLOCK_BYTES != 0 {
        return Err(CipherError::Decode);
    }

    let mut words = bytes_to_words(&bytes);
    transform_blocks(&mut words, &table, decrypt_block);

    Ok(String::from_utf8(words_to_bytes(&words))?)
}

fn transform_blocks(
    words: &mut [u32],
    table: &SubkeyTable,
    transform: fn(u32, u32, &SubkeyTable) -> (u32, u32),
) {
    for pair in words.chunks_exact_mut(2) {
        let (a, b) = transform(pair[0], pair[1], table);
        pair[0] = a;
        pair[1] = b;
    }
}
