//! GCM (Galois/Counter Mode) authenticated encryption.
//!
//! Implements GCM as defined in NIST SP 800-38D with 96-bit nonces and
//! 128-bit tags. Generic over any [`BlockCipher`] with a 16-byte block;
//! [`AesGcm`] is the AES instantiation.

use crate::aes::{AesKey, AES_BLOCK_SIZE};
use crate::ghash::ghash;
use crate::modes::ctr::xor_keystream;
use crate::provider::{Aead, BlockCipher};
use subtle::ConstantTimeEq;
use toyaes_types::CryptoError;
use zeroize::Zeroize;

/// Nonce size in bytes (96 bits).
pub const GCM_NONCE_SIZE: usize = 12;

/// Authentication tag size in bytes.
pub const GCM_TAG_SIZE: usize = 16;

/// Longest message a single nonce may cover: 2^32 - 2 blocks.
pub const GCM_MAX_INPUT_LEN: u64 = ((1u64 << 32) - 2) * AES_BLOCK_SIZE as u64;

type Block = [u8; AES_BLOCK_SIZE];

/// J0 = nonce || 0x00000001.
pub(crate) fn gen_counter(nonce: &[u8; GCM_NONCE_SIZE]) -> Block {
    let mut counter = [0u8; AES_BLOCK_SIZE];
    counter[..GCM_NONCE_SIZE].copy_from_slice(nonce);
    counter[AES_BLOCK_SIZE - 1] = 1;
    counter
}

/// inc32: add one to the last 4 bytes modulo 2^32, leaving the nonce alone.
pub(crate) fn increment_counter(counter: &mut Block) {
    let ctr =
        u32::from_be_bytes([counter[12], counter[13], counter[14], counter[15]]).wrapping_add(1);
    counter[12..].copy_from_slice(&ctr.to_be_bytes());
}

fn check_nonce(nonce: &[u8]) -> Result<[u8; GCM_NONCE_SIZE], CryptoError> {
    nonce.try_into().map_err(|_| CryptoError::InvalidIvLength {
        expected: GCM_NONCE_SIZE,
        got: nonce.len(),
    })
}

fn check_input_len(len: usize) -> Result<(), CryptoError> {
    if len as u64 > GCM_MAX_INPUT_LEN {
        return Err(CryptoError::InputOverflow);
    }
    Ok(())
}

/// GCM over a block cipher.
///
/// Holds only the cipher; every seal/open call builds its own counter and
/// GHASH state, so one instance can be shared between threads.
pub struct Gcm<C = AesKey> {
    cipher: C,
}

/// AES-GCM with a 128, 192 or 256-bit key.
pub type AesGcm = Gcm<AesKey>;

impl AesGcm {
    /// Expand `key` (16, 24 or 32 bytes) and wrap it in GCM.
    pub fn from_key(key: &[u8]) -> Result<Self, CryptoError> {
        Gcm::new(AesKey::new(key)?)
    }
}

impl<C: BlockCipher> Gcm<C> {
    /// Wrap a block cipher. GCM is only defined for 128-bit blocks.
    pub fn new(cipher: C) -> Result<Self, CryptoError> {
        if cipher.block_size() != AES_BLOCK_SIZE {
            return Err(CryptoError::InvalidArg);
        }
        Ok(Self { cipher })
    }

    /// The underlying block cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Counter-mode transform of `data` starting at `counter`.
    fn enc_with_counter(&self, data: &[u8], mut counter: Block) -> Result<Vec<u8>, CryptoError> {
        let mut out = data.to_vec();
        xor_keystream(&self.cipher, &mut counter, &mut out, increment_counter)?;
        Ok(out)
    }

    /// Tag = GHASH_H(aad, ciphertext) XOR E(J0), with H = E(0^128).
    fn compute_tag(&self, j0: &Block, ciphertext: &[u8], aad: &[u8]) -> Result<Block, CryptoError> {
        let mut hash_subkey = [0u8; AES_BLOCK_SIZE];
        self.cipher.encrypt(&mut hash_subkey, &[0u8; AES_BLOCK_SIZE])?;
        let mut ek0 = [0u8; AES_BLOCK_SIZE];
        self.cipher.encrypt(&mut ek0, j0)?;

        let mut tag = ghash(ciphertext, aad, &hash_subkey);
        for (t, &e) in tag.iter_mut().zip(ek0.iter()) {
            *t ^= e;
        }

        hash_subkey.zeroize();
        ek0.zeroize();
        Ok(tag)
    }
}

impl<C: BlockCipher> Aead for Gcm<C> {
    fn nonce_size(&self) -> usize {
        GCM_NONCE_SIZE
    }

    fn overhead(&self) -> usize {
        GCM_TAG_SIZE
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = check_nonce(nonce)?;
        check_input_len(plaintext.len())?;

        let j0 = gen_counter(&nonce);
        let mut counter = j0;
        increment_counter(&mut counter);

        let mut out = self.enc_with_counter(plaintext, counter)?;
        let tag = self.compute_tag(&j0, &out, aad)?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = check_nonce(nonce)?;
        if ciphertext.len() < GCM_TAG_SIZE {
            return Err(CryptoError::BufferTooSmall {
                need: GCM_TAG_SIZE,
                got: ciphertext.len(),
            });
        }
        let (ct_data, received_tag) = ciphertext.split_at(ciphertext.len() - GCM_TAG_SIZE);
        check_input_len(ct_data.len())?;

        let j0 = gen_counter(&nonce);
        let mut expected_tag = self.compute_tag(&j0, ct_data, aad)?;

        // Constant-time tag comparison
        let tag_ok = bool::from(expected_tag[..].ct_eq(received_tag));
        expected_tag.zeroize();
        if !tag_ok {
            return Err(CryptoError::AeadTagVerifyFail);
        }

        let mut counter = j0;
        increment_counter(&mut counter);
        self.enc_with_counter(ct_data, counter)
    }
}

/// Encrypt and authenticate data using AES-GCM.
/// Returns ciphertext || 16-byte tag.
pub fn gcm_seal(
    key: &[u8],
    nonce: &[u8],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    AesGcm::from_key(key)?.seal(nonce, plaintext, aad)
}

/// Verify and decrypt data using AES-GCM.
/// `ciphertext` includes the appended 16-byte tag.
pub fn gcm_open(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    AesGcm::from_key(key)?.open(nonce, ciphertext, aad)
}
