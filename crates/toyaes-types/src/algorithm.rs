use std::fmt;
use std::str::FromStr;

/// AEAD cipher identifiers (block cipher + GCM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgId {
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
}

impl CipherAlgId {
    pub const ALL: [CipherAlgId; 3] = [
        CipherAlgId::Aes128Gcm,
        CipherAlgId::Aes192Gcm,
        CipherAlgId::Aes256Gcm,
    ];

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            CipherAlgId::Aes128Gcm => 16,
            CipherAlgId::Aes192Gcm => 24,
            CipherAlgId::Aes256Gcm => 32,
        }
    }

    /// Nonce length in bytes. GCM is only offered with 96-bit nonces.
    pub fn nonce_len(self) -> usize {
        12
    }

    /// Authentication tag length in bytes.
    pub fn tag_len(self) -> usize {
        16
    }

    pub fn name(self) -> &'static str {
        match self {
            CipherAlgId::Aes128Gcm => "aes-128-gcm",
            CipherAlgId::Aes192Gcm => "aes-192-gcm",
            CipherAlgId::Aes256Gcm => "aes-256-gcm",
        }
    }
}

impl fmt::Display for CipherAlgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a cipher name is not one of [`CipherAlgId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCipher(pub String);

impl fmt::Display for UnknownCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cipher '{}' not supported. Supported: aes-128-gcm, aes-192-gcm, aes-256-gcm",
            self.0
        )
    }
}

impl std::error::Error for UnknownCipher {}

impl FromStr for CipherAlgId {
    type Err = UnknownCipher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aes-128-gcm" => Ok(CipherAlgId::Aes128Gcm),
            "aes-192-gcm" => Ok(CipherAlgId::Aes192Gcm),
            "aes-256-gcm" => Ok(CipherAlgId::Aes256Gcm),
            _ => Err(UnknownCipher(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_case_insensitively() {
        assert_eq!("AES-256-GCM".parse(), Ok(CipherAlgId::Aes256Gcm));
        assert_eq!("aes-192-gcm".parse(), Ok(CipherAlgId::Aes192Gcm));
        assert!("chacha20-poly1305".parse::<CipherAlgId>().is_err());
    }

    #[test]
    fn name_roundtrips_through_from_str() {
        for id in CipherAlgId::ALL {
            assert_eq!(id.to_string().parse(), Ok(id));
            assert_eq!(id.nonce_len(), 12);
            assert_eq!(id.tag_len(), 16);
        }
    }
}
