//! Key schedule: expands the 16 key bytes into the round subkey table.

use crate::key::{Key, KEY_BYTES};

/// Number of rounds in the block transform.
pub(crate) const ROUNDS: usize = 12;

/// Subkey table length: two words per round plus the two whitening words.
pub(crate) const TABLE_WORDS: usize = 2 * (ROUNDS + 1);

const KEY_WORDS: usize = KEY_BYTES / 4;

// Odd constants from the binary expansions of e and the golden ratio.
const P32: u32 = 0xB7E15163;
const Q32: u32 = 0x9E3779B9;

pub(crate) type SubkeyTable = [u32; TABLE_WORDS];

/// Derives the round subkey table from `key`.
///
/// Pure function of the key: the table is returned by value and threaded
/// explicitly through the block transform, never kept as shared state, so
/// concurrent calls with different keys cannot interfere.
///
/// Key bytes are loaded first-byte-high into each word (`(l << 8) + byte`,
/// iterating upward). This matches the wire format of the service this
/// engine was extracted from; textbook RC5 loads the bytes in the opposite
/// order, so standard RC5 test vectors do not apply.
pub(crate) fn expand(key: &Key) -> SubkeyTable {
    let mut l = [0u32; KEY_WORDS];
    for (i, &byte) in key.0.iter().enumerate() {
        l[i / 4] = (l[i / 4] << 8).wrapping_add(byte as u32);
    }

    let mut s = [0u32; TABLE_WORDS];
    s[0] = P32;
    for i in 1..TABLE_WORDS {
        s[i] = s[i - 1].wrapping_add(Q32);
    }

    let mut a = 0u32;
    let mut b = 0u32;
    let mut i = 0;
    let mut j = 0;
    for _ in 0..3 * TABLE_WORDS.max(KEY_WORDS) {
        a = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
        s[i] = a;
        b = l[j]
            .wrapping_add(a)
            .wrapping_add(b)
            .rotate_left(a.wrapping_add(b));
        l[j] = b;
        i = (i + 1) % TABLE_WORDS;
        j = (j + 1) % KEY_WORDS;
    }

    s
}
