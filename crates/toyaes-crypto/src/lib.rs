#![forbid(unsafe_code)]
#![doc = "AES block cipher and AES-GCM authenticated encryption for toyaes."]

// Core traits
pub mod provider;

// Symmetric ciphers
#[cfg(feature = "aes")]
pub mod aes;

// GF(2^128) universal hash
#[cfg(feature = "modes")]
pub mod ghash;

// Modes of operation
#[cfg(feature = "modes")]
pub mod modes;

pub mod cipher {
    //! Unified symmetric cipher interface.
    pub use super::provider::{Aead, BlockCipher};
}
