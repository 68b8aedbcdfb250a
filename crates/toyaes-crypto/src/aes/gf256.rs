//! GF(2^8) arithmetic modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial (0x11B with x^8 dropped).
const REDUCTION: u8 = 0x1b;

/// Multiply by `x` (one left shift with reduction).
pub(crate) fn xtime(x: u8) -> u8 {
    let carry = x & 0x80;
    let shifted = x << 1;
    if carry != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiply two field elements.
///
/// Walks the bits of `y` from least to most significant, adding the
/// running multiple of `x` whenever the bit is set.
pub fn mul(mut x: u8, mut y: u8) -> u8 {
    let mut sum = 0u8;
    for _ in 0..8 {
        if y & 1 != 0 {
            sum ^= x;
        }
        x = xtime(x);
        y >>= 1;
    }
    sum
}
