/// Cryptographic operation errors.
///
/// Every variant except [`CryptoError::AeadTagVerifyFail`] signals a
/// programming error by the caller (bad key length, bad buffer length,
/// oversized input) and is not meant to be handled at run time.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("invalid argument")]
    InvalidArg,

    // Buffer errors
    #[error("buffer length not enough: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },
    #[error("input data too long")]
    InputOverflow,

    // Symmetric cipher errors
    #[error("invalid key length: expected 16, 24 or 32, got {got}")]
    InvalidKeyLength { got: usize },
    #[error("invalid block length: expected 16, got {got}")]
    InvalidBlockLength { got: usize },
    #[error("invalid iv length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("aead: tag verification failed")]
    AeadTagVerifyFail,
}

impl CryptoError {
    /// Whether the error comes from untrusted data rather than API misuse.
    ///
    /// Only a failed tag check qualifies: the message must be discarded,
    /// but the caller can keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CryptoError::AeadTagVerifyFail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tag_failure_is_recoverable() {
        assert!(CryptoError::AeadTagVerifyFail.is_recoverable());
        assert!(!CryptoError::InvalidKeyLength { got: 7 }.is_recoverable());
        assert!(!CryptoError::InvalidBlockLength { got: 15 }.is_recoverable());
        assert!(!CryptoError::InvalidIvLength {
            expected: 12,
            got: 16
        }
        .is_recoverable());
        assert!(!CryptoError::BufferTooSmall { need: 16, got: 3 }.is_recoverable());
        assert!(!CryptoError::InputOverflow.is_recoverable());
    }

    #[test]
    fn messages_carry_lengths() {
        assert_eq!(
            CryptoError::InvalidKeyLength { got: 20 }.to_string(),
            "invalid key length: expected 16, 24 or 32, got 20"
        );
        assert_eq!(
            CryptoError::BufferTooSmall { need: 16, got: 4 }.to_string(),
            "buffer length not enough: need 16, got 4"
        );
    }
}
