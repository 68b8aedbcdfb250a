//! AES (Advanced Encryption Standard) block cipher implementation.
//!
//! Provides AES-128, AES-192, and AES-256 single-block operations written
//! directly from FIPS 197: S-box table lookup for SubBytes, GF(2^8)
//! multiplication for MixColumns. For modes of operation (GCM, CTR) see
//! the [`modes`](crate::modes) module.

pub mod gf256;
mod key_schedule;
mod round;
mod tables;

pub use key_schedule::key_expansion;

use toyaes_types::CryptoError;
use zeroize::Zeroize;

use crate::provider::BlockCipher;
use key_schedule::NB;
use round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};

/// AES block size in bytes (128 bits).
pub const AES_BLOCK_SIZE: usize = 16;

/// Key sizes accepted by [`AesKey::new`], in bytes.
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// An AES key with precomputed round keys.
///
/// Immutable after construction, so one instance can serve any number of
/// threads concurrently.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct AesKey {
    /// Expanded key schedule, `4 * (rounds + 1)` words.
    round_keys: Vec<u32>,
    rounds: usize,
    key_len: usize,
}

impl AesKey {
    /// Create a new AES key from raw bytes.
    ///
    /// Accepts 16, 24, or 32-byte keys for AES-128, AES-192, and AES-256.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let round_keys = key_expansion(key)?;
        let rounds = round_keys.len() / NB - 1;
        Ok(Self {
            round_keys,
            rounds,
            key_len: key.len(),
        })
    }

    /// Return the key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Number of rounds (10, 12 or 14).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The expanded key schedule.
    pub fn round_keys(&self) -> &[u32] {
        &self.round_keys
    }

    fn round_key(&self, round: usize) -> &[u32] {
        &self.round_keys[round * NB..(round + 1) * NB]
    }

    fn cipher(&self, s: &mut State) {
        add_round_key(s, self.round_key(0));
        for r in 1..self.rounds {
            sub_bytes(s);
            shift_rows(s);
            mix_columns(s);
            add_round_key(s, self.round_key(r));
        }
        sub_bytes(s);
        shift_rows(s);
        add_round_key(s, self.round_key(self.rounds));
    }

    fn inv_cipher(&self, s: &mut State) {
        add_round_key(s, self.round_key(self.rounds));
        for r in (1..self.rounds).rev() {
            inv_shift_rows(s);
            inv_sub_bytes(s);
            add_round_key(s, self.round_key(r));
            inv_mix_columns(s);
        }
        inv_shift_rows(s);
        inv_sub_bytes(s);
        add_round_key(s, self.round_key(0));
    }
}

/// Copy `src` into a fresh state, checking both buffer lengths.
fn load_state(dst: &[u8], src: &[u8]) -> Result<State, CryptoError> {
    for len in [src.len(), dst.len()] {
        if len != AES_BLOCK_SIZE {
            return Err(CryptoError::InvalidBlockLength { got: len });
        }
    }
    let mut s = [0u8; AES_BLOCK_SIZE];
    s.copy_from_slice(src);
    Ok(s)
}

impl BlockCipher for AesKey {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        self.key_len
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError> {
        let mut s = load_state(dst, src)?;
        self.cipher(&mut s);
        dst.copy_from_slice(&s);
        Ok(())
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError> {
        let mut s = load_state(dst, src)?;
        self.inv_cipher(&mut s);
        dst.copy_from_slice(&s);
        Ok(())
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        let mut s = load_state(block, block)?;
        self.cipher(&mut s);
        block.copy_from_slice(&s);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        let mut s = load_state(block, block)?;
        self.inv_cipher(&mut s);
        block.copy_from_slice(&s);
        Ok(())
    }
}
