//! Differential tests for toyaes.
//!
//! The RustCrypto `aes` and `aes-gcm` crates are wrapped behind the same
//! [`BlockCipher`] and [`Aead`] traits as our implementation, so every test
//! below is written once against the traits and run against both.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead as _, Payload};
use toyaes_crypto::cipher::{Aead, BlockCipher};
use toyaes_types::CryptoError;

const BLOCK_SIZE: usize = 16;
const NONCE_SIZE: usize = 12;
const TAG_SIZE: usize = 16;

type Aes192Gcm = aes_gcm::AesGcm<aes::Aes192, U12>;

/// RustCrypto AES as a [`BlockCipher`].
pub enum RefAes {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
}

impl RefAes {
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let bad_len = |_| CryptoError::InvalidKeyLength { got: key.len() };
        match key.len() {
            16 => aes::Aes128::new_from_slice(key).map(Self::Aes128).map_err(bad_len),
            24 => aes::Aes192::new_from_slice(key).map(Self::Aes192).map_err(bad_len),
            32 => aes::Aes256::new_from_slice(key).map(Self::Aes256).map_err(bad_len),
            got => Err(CryptoError::InvalidKeyLength { got }),
        }
    }
}

fn check_block(dst: &[u8], src: &[u8]) -> Result<(), CryptoError> {
    for len in [src.len(), dst.len()] {
        if len != BLOCK_SIZE {
            return Err(CryptoError::InvalidBlockLength { got: len });
        }
    }
    Ok(())
}

impl BlockCipher for RefAes {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        match self {
            RefAes::Aes128(_) => 16,
            RefAes::Aes192(_) => 24,
            RefAes::Aes256(_) => 32,
        }
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError> {
        check_block(dst, src)?;
        dst.copy_from_slice(src);
        let block = GenericArray::from_mut_slice(dst);
        match self {
            RefAes::Aes128(c) => c.encrypt_block(block),
            RefAes::Aes192(c) => c.encrypt_block(block),
            RefAes::Aes256(c) => c.encrypt_block(block),
        }
        Ok(())
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptoError> {
        check_block(dst, src)?;
        dst.copy_from_slice(src);
        let block = GenericArray::from_mut_slice(dst);
        match self {
            RefAes::Aes128(c) => c.decrypt_block(block),
            RefAes::Aes192(c) => c.decrypt_block(block),
            RefAes::Aes256(c) => c.decrypt_block(block),
        }
        Ok(())
    }
}

/// RustCrypto AES-GCM as an [`Aead`].
pub enum RefAesGcm {
    Aes128(aes_gcm::Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(aes_gcm::Aes256Gcm),
}

impl RefAesGcm {
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let bad_len = |_| CryptoError::InvalidKeyLength { got: key.len() };
        match key.len() {
            16 => aes_gcm::Aes128Gcm::new_from_slice(key)
                .map(Self::Aes128)
                .map_err(bad_len),
            24 => Aes192Gcm::new_from_slice(key).map(Self::Aes192).map_err(bad_len),
            32 => aes_gcm::Aes256Gcm::new_from_slice(key)
                .map(Self::Aes256)
                .map_err(bad_len),
            got => Err(CryptoError::InvalidKeyLength { got }),
        }
    }
}

fn check_nonce(nonce: &[u8]) -> Result<&aes_gcm::Nonce<U12>, CryptoError> {
    if nonce.len() != NONCE_SIZE {
        return Err(CryptoError::InvalidIvLength {
            expected: NONCE_SIZE,
            got: nonce.len(),
        });
    }
    Ok(aes_gcm::Nonce::<U12>::from_slice(nonce))
}

impl Aead for RefAesGcm {
    fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    fn overhead(&self) -> usize {
        TAG_SIZE
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = check_nonce(nonce)?;
        let payload = Payload {
            msg: plaintext,
            aad,
        };
        let sealed = match self {
            RefAesGcm::Aes128(c) => c.encrypt(nonce, payload),
            RefAesGcm::Aes192(c) => c.encrypt(nonce, payload),
            RefAesGcm::Aes256(c) => c.encrypt(nonce, payload),
        };
        sealed.map_err(|_| CryptoError::InvalidArg)
    }

    fn open(&self, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = check_nonce(nonce)?;
        if ciphertext.len() < TAG_SIZE {
            return Err(CryptoError::BufferTooSmall {
                need: TAG_SIZE,
                got: ciphertext.len(),
            });
        }
        let payload = Payload {
            msg: ciphertext,
            aad,
        };
        let opened = match self {
            RefAesGcm::Aes128(c) => c.decrypt(nonce, payload),
            RefAesGcm::Aes192(c) => c.decrypt(nonce, payload),
            RefAesGcm::Aes256(c) => c.decrypt(nonce, payload),
        };
        opened.map_err(|_| CryptoError::AeadTagVerifyFail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyaes_crypto::aes::{AesKey, AES_KEY_SIZES};
    use toyaes_crypto::modes::gcm::AesGcm;

    fn random(len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        getrandom::getrandom(&mut buf).unwrap();
        buf
    }

    fn random_len(max: usize) -> usize {
        let mut b = [0u8; 2];
        getrandom::getrandom(&mut b).unwrap();
        u16::from_le_bytes(b) as usize % (max + 1)
    }

    /// Encrypt with one, decrypt with the other, both directions.
    fn block_ciphers_agree(a: &dyn BlockCipher, b: &dyn BlockCipher, block: &[u8]) {
        let mut ct_a = [0u8; BLOCK_SIZE];
        let mut ct_b = [0u8; BLOCK_SIZE];
        a.encrypt(&mut ct_a, block).unwrap();
        b.encrypt(&mut ct_b, block).unwrap();
        assert_eq!(ct_a, ct_b);

        let mut pt = [0u8; BLOCK_SIZE];
        a.decrypt(&mut pt, &ct_b).unwrap();
        assert_eq!(&pt[..], block);
        b.decrypt(&mut pt, &ct_a).unwrap();
        assert_eq!(&pt[..], block);
    }

    fn aeads_agree(a: &dyn Aead, b: &dyn Aead, nonce: &[u8], pt: &[u8], aad: &[u8]) {
        let sealed_a = a.seal(nonce, pt, aad).unwrap();
        let sealed_b = b.seal(nonce, pt, aad).unwrap();
        assert_eq!(sealed_a, sealed_b);
        assert_eq!(sealed_a.len(), pt.len() + a.overhead());

        assert_eq!(a.open(nonce, &sealed_b, aad).unwrap(), pt);
        assert_eq!(b.open(nonce, &sealed_a, aad).unwrap(), pt);
    }

    #[test]
    fn aes_matches_reference_all_key_sizes() {
        for key_len in AES_KEY_SIZES {
            for _ in 0..500 {
                let key = random(key_len);
                let ours = AesKey::new(&key).unwrap();
                let theirs = RefAes::new(&key).unwrap();
                assert_eq!(ours.key_size(), theirs.key_size());
                block_ciphers_agree(&ours, &theirs, &random(BLOCK_SIZE));
            }
        }
    }

    #[test]
    fn aes_gcm_matches_reference_all_key_sizes() {
        for key_len in AES_KEY_SIZES {
            for _ in 0..200 {
                let key = random(key_len);
                let ours = AesGcm::from_key(&key).unwrap();
                let theirs = RefAesGcm::new(&key).unwrap();
                let pt = random(random_len(100));
                let aad = random(random_len(40));
                aeads_agree(&ours, &theirs, &random(NONCE_SIZE), &pt, &aad);
            }
        }
    }

    #[test]
    fn aes_gcm_matches_reference_on_long_messages() {
        let key = random(32);
        let ours = AesGcm::from_key(&key).unwrap();
        let theirs = RefAesGcm::new(&key).unwrap();
        for len in [255usize, 256, 4096, 4096 + 7, 65_536 + 3] {
            aeads_agree(&ours, &theirs, &random(NONCE_SIZE), &random(len), b"long");
        }
    }

    // All-zero and all-one nonces.
    #[test]
    fn aes_gcm_matches_reference_on_edge_nonces() {
        let key = random(16);
        let ours = AesGcm::from_key(&key).unwrap();
        let theirs = RefAesGcm::new(&key).unwrap();
        for nonce in [[0x00u8; 12], [0xffu8; 12]] {
            aeads_agree(&ours, &theirs, &nonce, &random(300), &random(17));
        }
    }

    #[test]
    fn both_reject_tampering() {
        let key = random(24);
        let impls: Vec<Box<dyn Aead>> = vec![
            Box::new(AesGcm::from_key(&key).unwrap()),
            Box::new(RefAesGcm::new(&key).unwrap()),
        ];
        let nonce = random(NONCE_SIZE);
        let sealed = impls[0].seal(&nonce, b"differential", b"aad").unwrap();

        for byte in 0..sealed.len() {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 0x80;
            for aead in &impls {
                assert_eq!(
                    aead.open(&nonce, &tampered, b"aad"),
                    Err(CryptoError::AeadTagVerifyFail),
                    "byte {byte}"
                );
            }
        }
    }

    #[test]
    fn both_reject_bad_lengths() {
        let key = random(16);
        let impls: Vec<Box<dyn Aead>> = vec![
            Box::new(AesGcm::from_key(&key).unwrap()),
            Box::new(RefAesGcm::new(&key).unwrap()),
        ];
        for aead in &impls {
            assert_eq!(aead.nonce_size(), NONCE_SIZE);
            assert!(matches!(
                aead.seal(&[0u8; 8], b"x", b""),
                Err(CryptoError::InvalidIvLength { expected: 12, got: 8 })
            ));
            assert!(matches!(
                aead.open(&[0u8; 12], &[0u8; 10], b""),
                Err(CryptoError::BufferTooSmall { need: 16, got: 10 })
            ));
        }
        assert!(RefAes::new(&[0u8; 20]).is_err());
        assert!(AesKey::new(&[0u8; 20]).is_err());
    }
}
