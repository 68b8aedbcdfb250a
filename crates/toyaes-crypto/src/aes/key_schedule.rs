//! AES key expansion (FIPS 197 section 5.2).

use toyaes_types::CryptoError;

use super::tables::{rcon, SBOX};

/// Words per round key (Nb).
pub(crate) const NB: usize = 4;

/// Number of rounds for a key of `nk` 32-bit words.
pub(crate) fn rounds_for(nk: usize) -> Option<usize> {
    match nk {
        4 => Some(10),
        6 => Some(12),
        8 => Some(14),
        _ => None,
    }
}

fn rot_word(w: u32) -> u32 {
    w.rotate_left(8)
}

fn sub_word(w: u32) -> u32 {
    u32::from_be_bytes(w.to_be_bytes().map(|b| SBOX[b as usize]))
}

/// Expand a 16, 24 or 32-byte key into `4 * (Nr + 1)` round-key words.
pub fn key_expansion(key: &[u8]) -> Result<Vec<u32>, CryptoError> {
    let nk = key.len() / 4;
    let nr = match rounds_for(nk) {
        Some(nr) if key.len() % 4 == 0 => nr,
        _ => return Err(CryptoError::InvalidKeyLength { got: key.len() }),
    };
    let total = NB * (nr + 1);

    let mut w: Vec<u32> = key
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    w.reserve_exact(total - nk);

    for i in nk..total {
        let mut tmp = w[i - 1];
        if i % nk == 0 {
            tmp = sub_word(rot_word(tmp)) ^ rcon(i / nk);
        } else if nk > 6 && i % nk == 4 {
            tmp = sub_word(tmp);
        }
        w.push(w[i - nk] ^ tmp);
    }
    Ok(w)
}
