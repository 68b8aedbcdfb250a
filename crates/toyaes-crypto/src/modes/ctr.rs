//! CTR (Counter) mode of operation (NIST SP 800-38A section 6.5).

use crate::aes::{AesKey, AES_BLOCK_SIZE};
use crate::provider::BlockCipher;
use toyaes_types::CryptoError;

/// Increment a 128-bit big-endian counter by 1, wrapping at 2^128.
pub(crate) fn increment_counter_128(counter: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// XOR `data` with the keystream E(counter), E(inc(counter)), ...
///
/// `counter` is left at the value following the last block used, so a
/// caller can continue the stream.
pub(crate) fn xor_keystream<C>(
    cipher: &C,
    counter: &mut [u8; AES_BLOCK_SIZE],
    data: &mut [u8],
    increment: fn(&mut [u8; AES_BLOCK_SIZE]),
) -> Result<(), CryptoError>
where
    C: BlockCipher + ?Sized,
{
    let mut mask = [0u8; AES_BLOCK_SIZE];
    for chunk in data.chunks_mut(AES_BLOCK_SIZE) {
        cipher.encrypt(&mut mask, &counter[..])?;
        for (d, &k) in chunk.iter_mut().zip(mask.iter()) {
            *d ^= k;
        }
        increment(counter);
    }
    Ok(())
}

/// Encrypt or decrypt data using CTR mode with AES.
/// `iv` must be 16 bytes (used as the initial counter value).
pub fn ctr_crypt(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<(), CryptoError> {
    let mut counter: [u8; AES_BLOCK_SIZE] =
        iv.try_into().map_err(|_| CryptoError::InvalidIvLength {
            expected: AES_BLOCK_SIZE,
            got: iv.len(),
        })?;
    let cipher = AesKey::new(key)?;
    xor_keystream(&cipher, &mut counter, data, increment_counter_128)
}
