//! AES-GCM file encryption/decryption command.
//!
//! Output framing is `nonce || ciphertext || tag`. Encryption draws a fresh
//! key and nonce from the OS and prints the key on stderr; decryption reads
//! the hex key from `TOYAES_KEY`.

use std::fs;

use toyaes_crypto::cipher::Aead;
use toyaes_crypto::modes::gcm::AesGcm;
use toyaes_types::CipherAlgId;
use zeroize::Zeroizing;

use crate::hex;

const KEY_ENV: &str = "TOYAES_KEY";

pub fn run(
    cipher: &str,
    decrypt: bool,
    input: &str,
    output: &str,
    aad: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let alg: CipherAlgId = cipher.parse()?;
    let op = if decrypt { "Decrypting" } else { "Encrypting" };
    eprintln!("{op} {input} -> {output} with {alg}");

    let data = fs::read(input)?;

    if decrypt {
        let key_hex = std::env::var(KEY_ENV)
            .map_err(|_| format!("set {KEY_ENV} environment variable to the hex key"))?;
        let key = Zeroizing::new(hex::decode(&key_hex)?);
        let plaintext = Zeroizing::new(open_framed(alg, &key, &data, aad.as_bytes())?);
        fs::write(output, plaintext.as_slice())?;
        eprintln!("Decrypted {} bytes", plaintext.len());
    } else {
        let mut key = Zeroizing::new(vec![0u8; alg.key_len()]);
        let mut nonce = vec![0u8; alg.nonce_len()];
        getrandom::getrandom(&mut key).map_err(|e| format!("random failed: {e}"))?;
        getrandom::getrandom(&mut nonce).map_err(|e| format!("random failed: {e}"))?;

        let framed = seal_framed(alg, &key, &nonce, &data, aad.as_bytes())?;
        fs::write(output, &framed)?;
        eprintln!("Key (save this): {}", hex::encode(&key));
    }

    Ok(())
}

fn check_key(alg: CipherAlgId, key: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if key.len() != alg.key_len() {
        return Err(format!(
            "{alg} key must be {} bytes ({} hex chars), got {}",
            alg.key_len(),
            alg.key_len() * 2,
            key.len()
        )
        .into());
    }
    Ok(())
}

/// Seal `plaintext` and prepend the nonce.
fn seal_framed(
    alg: CipherAlgId,
    key: &[u8],
    nonce: &[u8],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    check_key(alg, key)?;
    let gcm = AesGcm::from_key(key)?;
    let sealed = gcm.seal(nonce, plaintext, aad)?;

    let mut out = Vec::with_capacity(nonce.len() + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Split off the nonce, verify and decrypt.
fn open_framed(
    alg: CipherAlgId,
    key: &[u8],
    data: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    check_key(alg, key)?;
    let min_len = alg.nonce_len() + alg.tag_len();
    if data.len() < min_len {
        return Err(
            format!("ciphertext too short (need at least nonce + tag = {min_len} bytes)").into(),
        );
    }

    let (nonce, sealed) = data.split_at(alg.nonce_len());
    let gcm = AesGcm::from_key(key)?;
    Ok(gcm.open(nonce, sealed, aad)?)
}
