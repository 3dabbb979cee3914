//! Entropy generation and validation.
//!
//! Entropy is the raw randomness a mnemonic encodes. Only the five BIP-39
//! lengths (128 to 256 bits in steps of 32) can be turned into a sentence.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use crate::error::{MnemonicError, Result};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Smallest allowed entropy length in bits
pub const MIN_ENTROPY_BITS: usize = 128;

/// Largest allowed entropy length in bits
pub const MAX_ENTROPY_BITS: usize = 256;

/// Entropy lengths must be a multiple of this many bits
pub const ENTROPY_STEP_BITS: usize = 32;

/// All valid entropy lengths in bits
pub const VALID_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Raw entropy bytes.
///
/// The bytes are securely zeroed from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the entropy itself
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .finish()
    }
}

impl Entropy {
    /// Wrap raw bytes without any length validation.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Generate `length_bits` of entropy from the operating system's CSPRNG.
    ///
    /// # Example
    /// ```
    /// use mnemonic_rs::Entropy;
    /// let entropy = Entropy::random(256).unwrap();
    /// assert_eq!(entropy.len(), 32);
    /// ```
    pub fn random(length_bits: usize) -> Result<Self> {
        validate_length(length_bits)?;

        let mut bytes = vec![0u8; length_bits / 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| MnemonicError::source_unavailable(e.to_string()))?;

        tracing::trace!(bits = length_bits, "Generated random entropy");
        Ok(Self(bytes))
    }

    /// Generate entropy sized for a sentence of `word_count` words.
    pub fn random_for_words(word_count: usize) -> Result<Self> {
        Self::random(bits_for_word_count(word_count)?)
    }

    /// Decode entropy from an upper- or lowercase hex string.
    ///
    /// Only the hex syntax is checked here. Whether the length can be encoded
    /// is decided later by the codec.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Check that `length_bits` is one of the five encodable entropy lengths.
pub fn validate_length(length_bits: usize) -> Result<()> {
    if length_bits < MIN_ENTROPY_BITS
        || length_bits > MAX_ENTROPY_BITS
        || length_bits % ENTROPY_STEP_BITS != 0
    {
        return Err(MnemonicError::InvalidLength(length_bits));
    }
    Ok(())
}

/// Entropy bit length for a given sentence word count.
pub fn bits_for_word_count(word_count: usize) -> Result<usize> {
    match word_count {
        12 => Ok(128),
        15 => Ok(160),
        18 => Ok(192),
        21 => Ok(224),
        24 => Ok(256),
        _ => Err(MnemonicError::InvalidWordCount(word_count)),
    }
}

/// Sentence word count for a given entropy bit length.
pub fn word_count_for_bits(length_bits: usize) -> Result<usize> {
    validate_length(length_bits)?;
    // (ENT + ENT/32) / 11 == 3 * ENT / 32
    Ok(length_bits * 3 / 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_valid_lengths() {
        for bits in VALID_ENTROPY_BITS {
            let entropy = Entropy::random(bits).unwrap();
            assert_eq!(entropy.bit_len(), bits);
        }
    }

    #[test]
    fn test_random_invalid_lengths() {
        for bits in [0, 96, 127, 129, 144, 255, 288, 512] {
            assert_eq!(
                Entropy::random(bits).unwrap_err(),
                MnemonicError::InvalidLength(bits)
            );
        }
    }

    #[test]
    fn test_random_is_not_constant() {
        let a = Entropy::random(256).unwrap();
        let b = Entropy::random(256).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_hex_mixed_case() {
        let lower = Entropy::from_hex("7f7f7f7f").unwrap();
        let upper = Entropy::from_hex("7F7F7F7F").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_bytes(), &[0x7f; 4]);
    }

    #[test]
    fn test_from_hex_skips_length_validation() {
        let entropy = Entropy::from_hex("00").unwrap();
        assert_eq!(entropy.bit_len(), 8);
    }

    #[test]
    fn test_from_hex_malformed() {
        assert!(matches!(
            Entropy::from_hex("abc"),
            Err(MnemonicError::MalformedHex(_))
        ));
        assert!(matches!(
            Entropy::from_hex("zz00"),
            Err(MnemonicError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_word_count_mapping() {
        let pairs = [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)];
        for (bits, words) in pairs {
            assert_eq!(word_count_for_bits(bits).unwrap(), words);
            assert_eq!(bits_for_word_count(words).unwrap(), bits);
        }
        assert_eq!(
            bits_for_word_count(13).unwrap_err(),
            MnemonicError::InvalidWordCount(13)
        );
    }

    #[test]
    fn test_debug_hides_bytes() {
        let entropy = Entropy::from_hex("deadbeef").unwrap();
        let debug = format!("{:?}", entropy);
        assert!(!debug.contains("de"));
        assert!(debug.contains("32"));
    }
}
