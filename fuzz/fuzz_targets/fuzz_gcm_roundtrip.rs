#![no_main]
use libfuzzer_sys::fuzz_target;
use toyaes_crypto::cipher::Aead;
use toyaes_crypto::modes::gcm::AesGcm;
use toyaes_types::CryptoError;

fuzz_target!(|data: &[u8]| {
    if data.len() < 29 {
        return;
    }
    let (key, rest) = data.split_at(16);
    let (nonce, rest) = rest.split_at(12);
    let split = rest[0] as usize % rest.len();
    let (aad, pt) = rest[1..].split_at(split.min(rest.len() - 1));

    let gcm = AesGcm::from_key(key).unwrap();
    let sealed = gcm.seal(nonce, pt, aad).unwrap();
    assert_eq!(gcm.open(nonce, &sealed, aad).unwrap(), pt);

    let mut tampered = sealed.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x01;
    assert_eq!(
        gcm.open(nonce, &tampered, aad),
        Err(CryptoError::AeadTagVerifyFail)
    );
});
