//! Byte buffer <-> 32-bit word conversion, including the padding rule.
//!
//! Words are little-endian. A buffer that is not a multiple of 8 bytes is
//! implicitly right-padded with zero bytes so that words always pair up
//! into whole blocks; no length metadata survives, so the padding is not
//! recoverable from the output.

use crate::block::BLOCK_BYTES;

const WORD_BYTES: usize = 32 / 8;

/// Groups `data` into little-endian words, zero-filled up to a whole
/// number of blocks. The result always has an even number of words.
pub(crate) fn bytes_to_words(data: &[u8]) -> Vec<u32> {
    let num_words = data.len().div_ceil(BLOCK_BYTES) * 2;
    let mut words = vec![0u32; num_words];

    for (i, chunk) in data.chunks(WORD_BYTES).enumerate() {
        let mut word = 0u32;
        for (j, &byte) in chunk.iter().enumerate() {
            word |= (byte as u32) << (j * 8);
        }
        words[i] = word;
    }

    words
}

/// Decomposes each word into 4 little-endian bytes. The output is always
/// `4 * words.len()` bytes; nothing is trimmed back to an original length.
pub(crate) fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * WORD_BYTES);
    for &word in words {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes
}
