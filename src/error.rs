//! Error types for mnemonic encoding, decoding and validation

use thiserror::Error;

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, MnemonicError>;

/// Errors produced by the mnemonic pipeline.
///
/// Validation outcomes (unknown words, wrong word counts, checksum mismatch)
/// are ordinary values of this type and never abort the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// Entropy bit length outside {128, 160, 192, 224, 256}
    #[error("Invalid entropy length: {0} bits. Must be 128, 160, 192, 224, or 256")]
    InvalidLength(usize),

    /// Requested word count outside {12, 15, 18, 21, 24}
    #[error("Invalid word count: {0}. Must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// Hex entropy could not be decoded
    #[error("Malformed hex entropy: {0}")]
    MalformedHex(String),

    /// The OS random generator failed
    #[error("Secure random source unavailable: {0}")]
    SourceUnavailable(String),

    /// Checksummed bit sequence has a length outside {132, 165, 198, 231, 264}
    #[error("Invalid bit length: {0}. Must be 132, 165, 198, 231, or 264")]
    InvalidBitLength(usize),

    /// Checksummed bit sequence cannot be split into 11-bit word indices
    #[error("Invalid entropy length: {0} checksummed bits is not a multiple of 11")]
    InvalidEntropyLength(usize),

    /// Word not present in the language's word list
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// Word list could not resolve an index while encoding
    #[error("No word for index {0}")]
    UnknownIndex(u16),

    /// Index outside 0..=2047
    #[error("Word index {0} out of range (0..=2047)")]
    IndexOutOfRange(usize),

    /// Checksum mismatch or any decode failure during recovery.
    /// Carries no word or position.
    #[error("Invalid mnemonic")]
    InvalidMnemonic,

    /// A bundled word list is not a 2048-entry bijection
    #[error("Word list integrity failure for {language}: {reason}")]
    WordListIntegrity { language: String, reason: String },
}

impl MnemonicError {
    pub fn malformed_hex(msg: impl Into<String>) -> Self {
        MnemonicError::MalformedHex(msg.into())
    }

    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        MnemonicError::SourceUnavailable(msg.into())
    }

    pub fn unknown_word(word: impl Into<String>) -> Self {
        MnemonicError::UnknownWord(word.into())
    }

    /// True for outcomes caused by user input (bad sentence, bad length),
    /// false for setup-time failures such as a corrupted word list or a
    /// broken random source.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            MnemonicError::InvalidLength(_)
                | MnemonicError::InvalidWordCount(_)
                | MnemonicError::MalformedHex(_)
                | MnemonicError::InvalidBitLength(_)
                | MnemonicError::InvalidEntropyLength(_)
                | MnemonicError::UnknownWord(_)
                | MnemonicError::InvalidMnemonic
        )
    }
}

impl From<hex::FromHexError> for MnemonicError {
    fn from(e: hex::FromHexError) -> Self {
        MnemonicError::MalformedHex(e.to_string())
    }
}
