//! Minimal 128-bit unsigned integer for GF(2^128) arithmetic.
//!
//! Only the operations GHASH needs are provided: XOR (field addition),
//! AND (bit tests) and logical right shift.

use std::fmt;
use std::ops::{BitAnd, BitXor, Shr};

/// 128-bit value as a (high, low) pair of 64-bit halves.
///
/// Serialized big-endian: `hi` holds bytes 0..8, `lo` bytes 8..16.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint128 {
    pub hi: u64,
    pub lo: u64,
}

impl Uint128 {
    pub const ZERO: Self = Self::new(0, 0);
    /// The integer 1 (least significant bit of `lo`).
    pub const ONE: Self = Self::new(0, 1);

    pub const fn new(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    pub fn from_be_bytes(b: [u8; 16]) -> Self {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&b[..8]);
        lo.copy_from_slice(&b[8..]);
        Self {
            hi: u64::from_be_bytes(hi),
            lo: u64::from_be_bytes(lo),
        }
    }

    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.hi.to_be_bytes());
        out[8..].copy_from_slice(&self.lo.to_be_bytes());
        out
    }

    pub fn xor(self, other: Self) -> Self {
        Self {
            hi: self.hi ^ other.hi,
            lo: self.lo ^ other.lo,
        }
    }

    pub fn and(self, other: Self) -> Self {
        Self {
            hi: self.hi & other.hi,
            lo: self.lo & other.lo,
        }
    }

    /// Logical right shift by any amount; shifts of 128 or more give zero.
    pub fn right_shift(self, n: u32) -> Self {
        match n {
            0 => self,
            1..=63 => Self {
                hi: self.hi >> n,
                lo: (self.lo >> n) | (self.hi << (64 - n)),
            },
            64 => Self { hi: 0, lo: self.hi },
            65..=127 => Self {
                hi: 0,
                lo: self.hi >> (n - 64),
            },
            _ => Self::ZERO,
        }
    }

    /// Whether bit `n` (0 = least significant) is set.
    pub fn bit(self, n: u32) -> bool {
        self.right_shift(n).and(Self::ONE) == Self::ONE
    }
}

impl BitXor for Uint128 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl BitAnd for Uint128 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl Shr<u32> for Uint128 {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        self.right_shift(n)
    }
}

impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint128({:#018x}, {:#018x})", self.hi, self.lo)
    }
}

impl fmt::Binary for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}, {:064b}", self.hi, self.lo)
    }
}
