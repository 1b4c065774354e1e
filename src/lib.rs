//! Rondel symmetric block cipher engine.
//!
//! Rondel encrypts note titles and bodies at rest for a notes-management
//! service. It is a Feistel-like block cipher over 64-bit blocks (two `u32`
//! words) with 12 rounds of data-dependent rotation, and a from-scratch key
//! schedule that expands a 128-bit key into 26 round subkeys.
//!
//! # Architecture
//!
//! ```text
//! codec     bytes <-> little-endian words, implicit zero padding
//! schedule  16 key bytes -> 26-word round subkey table
//! block     encrypt_block / decrypt_block over one (u32, u32) pair
//! cipher    façade: generate_key / encrypt / decrypt, base64 transport
//! ```
//!
//! # Properties callers must know about
//!
//! - **Deterministic, ECB-equivalent**: blocks are transformed
//!   independently, with no IV and no chaining. The same plaintext under
//!   the same key always produces the same ciphertext, and identical
//!   blocks leak their equality. This is the engine's wire format; do not
//!   expect semantic security across repeated plaintexts.
//! - **Padding is not removed**: input is zero-padded to a multiple of 8
//!   bytes and no length is stored, so [`decrypt`] of a non-aligned input
//!   returns the original text followed by trailing NUL bytes.
//! - **Keys are exactly 16 bytes**, supplied transport-encoded. Arbitrary
//!   strings (usernames and the like) are rejected with
//!   [`CipherError::KeyFormat`], not silently stretched or truncated.
//!
//! # Example
//!
//! ```
//! let key = rondel::generate_key()?;
//!
//! let ciphertext = rondel::encrypt("TESTBLOK", &key)?;
//! assert_eq!(rondel::decrypt(&ciphertext, &key)?, "TESTBLOK");
//! # Ok::<(), rondel::CipherError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]

pub mod error;

mod block;
mod cipher;
mod codec;
mod key;
mod schedule;

pub use crate::cipher::{decrypt, encrypt, generate_key};
pub use crate::error::CipherError;
pub use crate::key::{Key, KEY_BYTES};
