#![no_main]
use libfuzzer_sys::fuzz_target;
use toyaes_crypto::aes::AesKey;
use toyaes_crypto::cipher::BlockCipher;

fuzz_target!(|data: &[u8]| {
    if data.len() < 48 {
        return;
    }
    let key_len = [16, 24, 32][data[0] as usize % 3];
    let aes = AesKey::new(&data[..key_len]).unwrap();
    let block = &data[32..48];

    let mut ct = [0u8; 16];
    let mut pt = [0u8; 16];
    aes.encrypt(&mut ct, block).unwrap();
    aes.decrypt(&mut pt, &ct).unwrap();
    assert_eq!(&pt[..], block);
});
