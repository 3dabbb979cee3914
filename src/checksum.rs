//! Entropy checksum: the leading `ENT / 32` bits of SHA-256(entropy).

use crate::bits::BitSequence;
use crate::entropy::Entropy;
use sha2::{Digest, Sha256};

/// Checksum bits appended to entropy before word chunking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checksum(BitSequence);

impl Checksum {
    /// Compute the checksum of `entropy`.
    ///
    /// # Example
    /// ```
    /// use mnemonic_rs::{Checksum, Entropy};
    /// let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
    /// assert_eq!(Checksum::compute(&entropy).bits().to_string(), "0011");
    /// ```
    pub fn compute(entropy: &Entropy) -> Self {
        let digest = Sha256::digest(entropy.as_bytes());
        let hash_bits = BitSequence::from_bytes(&digest);
        Self(hash_bits.truncated(entropy.bit_len() / 32))
    }

    pub(crate) fn from_bits(bits: BitSequence) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> &BitSequence {
        &self.0
    }

    /// Checksum length in bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Entropy bits followed by their checksum.
pub fn append_checksum(entropy: &Entropy) -> BitSequence {
    let checksum = Checksum::compute(entropy);
    let mut bits = BitSequence::from_bytes(entropy.as_bytes());
    bits.extend(checksum.bits());
    bits
}
