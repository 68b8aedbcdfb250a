//! GHASH universal hash over GF(2^128) (NIST SP 800-38D section 6.4).
//!
//! Field elements use the GCM bit order: the most significant bit of the
//! big-endian 128-bit value is the coefficient of x^0, so multiplying by
//! `x` is a right shift and the reduction polynomial
//! `x^128 + x^7 + x^2 + x + 1` folds back in as `0xE1 || 0^120`.
//!
//! This is the bit-serial algorithm 1 of the standard; it favours being
//! easy to check against the text over speed.

mod uint128;

pub use uint128::Uint128;

/// GHASH block size in bytes.
pub const GHASH_BLOCK_SIZE: usize = 16;

/// Reduction constant R = 11100001 || 0^120.
const R: Uint128 = Uint128::new(0xe100_0000_0000_0000, 0);

/// Multiply by `x`: shift right one bit, reducing if a bit falls off.
fn mul_x(v: Uint128) -> Uint128 {
    if v.and(Uint128::ONE) == Uint128::ONE {
        v.right_shift(1).xor(R)
    } else {
        v.right_shift(1)
    }
}

/// Multiply two elements of GF(2^128).
pub fn mulg(lhs: Uint128, mut rhs: Uint128) -> Uint128 {
    let mut sum = Uint128::ZERO;
    for b in (0..128).rev() {
        if lhs.bit(b) {
            sum = sum.xor(rhs);
        }
        rhs = mul_x(rhs);
    }
    sum
}

/// Split `data` into 16-byte blocks, zero padding the last short one.
///
/// The iterator is lazy and `Clone`, so it can be restarted.
pub fn blocks(data: &[u8]) -> impl Iterator<Item = Uint128> + Clone + '_ {
    data.chunks(GHASH_BLOCK_SIZE).map(|chunk| {
        let mut block = [0u8; GHASH_BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        Uint128::from_be_bytes(block)
    })
}

/// GHASH_H(A || pad || C || pad || len(A) || len(C)).
///
/// `hash_subkey` is H = E_K(0^128).
pub fn ghash(ciphertext: &[u8], aad: &[u8], hash_subkey: &[u8; 16]) -> [u8; 16] {
    let h = Uint128::from_be_bytes(*hash_subkey);
    let mut x = Uint128::ZERO;
    for block in blocks(aad).chain(blocks(ciphertext)) {
        x = mulg(x.xor(block), h);
    }

    let lengths = Uint128::new(bit_len(aad), bit_len(ciphertext));
    x = mulg(x.xor(lengths), h);
    x.to_be_bytes()
}

fn bit_len(data: &[u8]) -> u64 {
    (data.len() as u64) * 8
}
