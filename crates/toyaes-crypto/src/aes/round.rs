//! AES round primitives operating on the 16-byte state.
//!
//! The state is column-major: the byte at row `r`, column `c` lives at
//! offset `r + 4 * c`, matching the order in which input bytes are copied in.

use super::gf256::mul;
use super::tables::{INV_SBOX, SBOX};

/// The 4x4 byte state matrix.
pub(crate) type State = [u8; 16];

pub(crate) fn sub_bytes(s: &mut State) {
    for b in s.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

pub(crate) fn inv_sub_bytes(s: &mut State) {
    for b in s.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

/// Rotate row `r` left by `r` positions. Row 0 is untouched.
pub(crate) fn shift_rows(s: &mut State) {
    for r in 1..4 {
        let row = [s[r], s[r + 4], s[r + 8], s[r + 12]];
        for c in 0..4 {
            s[r + 4 * c] = row[(c + r) % 4];
        }
    }
}

/// Rotate row `r` right by `r` positions.
pub(crate) fn inv_shift_rows(s: &mut State) {
    for r in 1..4 {
        let row = [s[r], s[r + 4], s[r + 8], s[r + 12]];
        for c in 0..4 {
            s[r + 4 * c] = row[(c + 4 - r) % 4];
        }
    }
}

/// Multiply every column by the circulant {02, 03, 01, 01}.
pub(crate) fn mix_columns(s: &mut State) {
    for col in s.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = mul(0x02, a0) ^ mul(0x03, a1) ^ a2 ^ a3;
        col[1] = a0 ^ mul(0x02, a1) ^ mul(0x03, a2) ^ a3;
        col[2] = a0 ^ a1 ^ mul(0x02, a2) ^ mul(0x03, a3);
        col[3] = mul(0x03, a0) ^ a1 ^ a2 ^ mul(0x02, a3);
    }
}

/// Multiply every column by the circulant {0e, 0b, 0d, 09}.
pub(crate) fn inv_mix_columns(s: &mut State) {
    for col in s.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = mul(0x0e, a0) ^ mul(0x0b, a1) ^ mul(0x0d, a2) ^ mul(0x09, a3);
        col[1] = mul(0x09, a0) ^ mul(0x0e, a1) ^ mul(0x0b, a2) ^ mul(0x0d, a3);
        col[2] = mul(0x0d, a0) ^ mul(0x09, a1) ^ mul(0x0e, a2) ^ mul(0x0b, a3);
        col[3] = mul(0x0b, a0) ^ mul(0x0d, a1) ^ mul(0x09, a2) ^ mul(0x0e, a3);
    }
}

/// XOR the four round-key words (big-endian) into the state, one per column.
pub(crate) fn add_round_key(s: &mut State, words: &[u32]) {
    for (col, word) in s.chunks_exact_mut(4).zip(words) {
        for (b, k) in col.iter_mut().zip(word.to_be_bytes()) {
            *b ^= k;
        }
    }
}
