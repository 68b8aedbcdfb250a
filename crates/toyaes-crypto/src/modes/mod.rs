//! Block cipher modes of operation.
//!
//! CTR and GCM, each running on top of a block cipher through the
//! [`BlockCipher`](crate::provider::BlockCipher) trait.

pub mod ctr;
pub mod gcm;
