//! The per-block transform: 12 rounds of xor, data-dependent rotation and
//! subkey addition over a pair of words. All arithmetic is wrapping u32;
//! `rotate_left`/`rotate_right` reduce the shift amount modulo 32.

use crate::schedule::{SubkeyTable, ROUNDS};

/// Block length in bytes (two 32-bit words).
pub(crate) const BLOCK_BYTES: usize = 64 / 8;

pub(crate) fn encrypt_block(a: u32, b: u32, s: &SubkeyTable) -> (u32, u32) {
    let mut a = a.wrapping_add(s[0]);
    let mut b = b.wrapping_add(s[1]);

    for r in 1..=ROUNDS {
        a = (a ^ b).rotate_left(b).wrapping_add(s[2 * r]);
        b = (b ^ a).rotate_left(a).wrapping_add(s[2 * r + 1]);
    }

    (a, b)
}

pub(crate) fn decrypt_block(a: u32, b: u32, s: &SubkeyTable) -> (u32, u32) {
    let mut a = a;
    let mut b = b;

    for r in (1..=ROUNDS).rev() {
        b = b.wrapping_sub(s[2 * r + 1]).rotate_right(a) ^ a;
        a = a.wrapping_sub(s[2 * r]).rotate_right(b) ^ b;
    }

    (a.wrapping_sub(s[0]), b.wrapping_sub(s[1]))
}
