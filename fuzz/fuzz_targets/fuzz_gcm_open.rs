#![no_main]
use libfuzzer_sys::fuzz_target;
use toyaes_crypto::cipher::Aead;
use toyaes_crypto::modes::gcm::AesGcm;

// Layout: key_len selector (1) || key (32) || nonce (12) || aad_len (1) || aad || sealed
fuzz_target!(|data: &[u8]| {
    if data.len() < 46 {
        return;
    }
    let key_len = [16, 24, 32][data[0] as usize % 3];
    let Ok(gcm) = AesGcm::from_key(&data[1..1 + key_len]) else {
        return;
    };
    let nonce = &data[33..45];
    let aad_len = (data[45] as usize).min(data.len() - 46);
    let aad = &data[46..46 + aad_len];
    let sealed = &data[46 + aad_len..];

    // Must not panic; anything accepted has the right length.
    if let Ok(pt) = gcm.open(nonce, sealed, aad) {
        assert_eq!(pt.len() + 16, sealed.len());
    }
});
