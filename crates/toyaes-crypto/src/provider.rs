//! Trait-based provider mechanism for cryptographic algorithms.
//!
//! These traits define the abstract contracts that every block cipher and
//! AEAD implementation satisfies, so that independent implementations can
//! be swapped for one another (and compared against one another) without
//! the caller knowing which one it holds.

use toyaes_types::CryptoError;

/// A block cipher with a fixed block size (e.g., AES).
pub trait BlockCipher: Send + Sync {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Key size in bytes.
    fn key_size(&self) -> usize;

    /// Encrypt exactly one block from `src` into `dst`.
    ///
    /// Both buffers must be exactly `block_size()` bytes long.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError>;

    /// Decrypt exactly one block from `src` into `dst`.
    ///
    /// Both buffers must be exactly `block_size()` bytes long.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError>;

    /// Encrypt a single block in-place.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        let src = block.to_vec();
        self.encrypt(block, &src)
    }

    /// Decrypt a single block in-place.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CryptoError> {
        let src = block.to_vec();
        self.decrypt(block, &src)
    }
}

/// An Authenticated Encryption with Associated Data (AEAD) algorithm.
pub trait Aead: Send + Sync {
    /// The expected nonce size in bytes.
    fn nonce_size(&self) -> usize;

    /// Number of bytes the sealed output adds to the plaintext (the tag).
    fn overhead(&self) -> usize;

    /// Encrypt and authenticate `plaintext`, binding `aad`.
    ///
    /// Returns ciphertext || tag.
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verify and decrypt `ciphertext`, which includes the appended tag.
    ///
    /// No plaintext is returned unless the tag verifies.
    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
