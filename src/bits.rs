//! Bit-level packing between bytes, 11-bit word indices and the checksummed layout.
//!
//! Bits are kept MSB first within each byte, in byte order. A sequence of
//! `ENT + ENT/32` bits is sliced into consecutive 11-bit chunks, each of which
//! selects one word from a 2048-entry list.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use crate::checksum::Checksum;
use crate::entropy::Entropy;
use crate::error::{MnemonicError, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of bits per word index
pub const WORD_BITS: usize = 11;

/// Number of words in every word list (2^11)
pub const WORD_LIST_SIZE: usize = 1 << WORD_BITS;

/// All valid checksummed bit lengths (entropy bits + checksum bits)
pub const VALID_CHECKSUMMED_BITS: [usize; 5] = [132, 165, 198, 231, 264];

/// An ordered sequence of single bits.
///
/// Zeroized on drop since it usually carries entropy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitSequence(Vec<bool>);

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Expand each byte into 8 bits, most significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for byte in bytes {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1 == 1);
            }
        }
        Self(bits)
    }

    /// Concatenate the 11-bit, zero-padded representations of `indices`.
    pub fn from_word_indices(indices: &[WordIndex]) -> Self {
        let mut bits = Self::with_capacity(indices.len() * WORD_BITS);
        for index in indices {
            bits.0.extend_from_slice(&index.to_bits());
        }
        bits
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn extend(&mut self, other: &BitSequence) {
        self.0.extend_from_slice(&other.0);
    }

    /// The first `len` bits (or all of them if shorter).
    pub fn truncated(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }

    /// Flip the bit at `position`. Returns false when out of range.
    pub fn flip(&mut self, position: usize) -> bool {
        match self.0.get_mut(position) {
            Some(bit) => {
                *bit = !*bit;
                true
            }
            None => false,
        }
    }

    /// Split into consecutive, non-overlapping 11-bit word indices.
    pub fn word_indices(&self) -> Result<Vec<WordIndex>> {
        if self.0.len() % WORD_BITS != 0 {
            return Err(MnemonicError::InvalidEntropyLength(self.0.len()));
        }
        Ok(self
            .0
            .chunks_exact(WORD_BITS)
            .map(|chunk| WordIndex(pack(chunk)))
            .collect())
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.0 {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// An 11-bit word index in `0..=2047`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordIndex(u16);

impl WordIndex {
    /// Largest valid index
    pub const MAX: u16 = (WORD_LIST_SIZE - 1) as u16;

    pub fn new(index: usize) -> Result<Self> {
        if index > Self::MAX as usize {
            return Err(MnemonicError::IndexOutOfRange(index));
        }
        Ok(Self(index as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Interpret exactly 11 bits as a big-endian integer.
    pub fn from_bits(bits: &[bool; WORD_BITS]) -> Self {
        Self(pack(bits))
    }

    /// Exactly 11 bits, big-endian, left-padded with zeros.
    pub fn to_bits(self) -> [bool; WORD_BITS] {
        let mut bits = [false; WORD_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (self.0 >> (WORD_BITS - 1 - i)) & 1 == 1;
        }
        bits
    }
}

impl From<WordIndex> for usize {
    fn from(index: WordIndex) -> Self {
        index.0 as usize
    }
}

/// Split a checksummed bit sequence back into entropy and checksum.
///
/// Only the five valid totals are accepted. A multiple of 11 that is not one
/// of them (e.g. 143 bits from a 13-word sentence) is rejected too.
pub fn bits_to_entropy_and_checksum(bits: &BitSequence) -> Result<(Entropy, Checksum)> {
    let len = bits.len();
    if !VALID_CHECKSUMMED_BITS.contains(&len) {
        return Err(MnemonicError::InvalidBitLength(len));
    }

    let checksum_len = len / 32;
    let entropy_len = len - checksum_len;

    let bytes: Vec<u8> = bits.0[..entropy_len]
        .chunks_exact(8)
        .map(|chunk| pack(chunk) as u8)
        .collect();
    let checksum = Checksum::from_bits(bits.0[entropy_len..].iter().copied().collect());

    Ok((Entropy::from_bytes(bytes), checksum))
}

/// Fold MSB-first bits into an integer. Callers pass at most 11 bits.
fn pack(bits: &[bool]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_msb_first() {
        let bits = BitSequence::from_bytes(&[0b1000_0001, 0x0f]);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_string(), "1000000100001111");
    }

    #[test]
    fn test_from_bytes_empty() {
        assert!(BitSequence::from_bytes(&[]).is_empty());
    }

    #[test]
    fn test_word_index_bits_are_left_padded() {
        let one = WordIndex::new(1).unwrap();
        let bits = one.to_bits();
        assert_eq!(bits.len(), WORD_BITS);
        assert_eq!(bits[..10], [false; 10]);
        assert!(bits[10]);

        let max = WordIndex::new(2047).unwrap();
        assert_eq!(max.to_bits(), [true; WORD_BITS]);
        assert_eq!(WordIndex::new(0).unwrap().to_bits(), [false; WORD_BITS]);
    }

    #[test]
    fn test_word_index_from_bits() {
        let mut bits = [false; WORD_BITS];
        bits[0] = true;
        bits[10] = true;
        assert_eq!(WordIndex::from_bits(&bits).value(), 1025);
        assert_eq!(WordIndex::from_bits(&WordIndex::new(3).unwrap().to_bits()).value(), 3);
    }

    #[test]
    fn test_word_index_out_of_range() {
        assert_eq!(
            WordIndex::new(2048).unwrap_err(),
            MnemonicError::IndexOutOfRange(2048)
        );
    }

    #[test]
    fn test_padding_keeps_chunk_boundaries() {
        let indices = [
            WordIndex::new(1).unwrap(),
            WordIndex::new(2047).unwrap(),
            WordIndex::new(0).unwrap(),
        ];
        let bits = BitSequence::from_word_indices(&indices);
        assert_eq!(bits.len(), 33);
        assert_eq!(bits.word_indices().unwrap(), indices);
    }

    #[test]
    fn test_word_indices_rejects_partial_chunk() {
        let bits = BitSequence::from_bytes(&[0xff, 0xff]);
        assert_eq!(
            bits.word_indices().unwrap_err(),
            MnemonicError::InvalidEntropyLength(16)
        );
    }

    #[test]
    fn test_split_accepts_only_valid_totals() {
        for len in 0..300usize {
            let bits: BitSequence = std::iter::repeat(false).take(len).collect();
            let result = bits_to_entropy_and_checksum(&bits);
            if VALID_CHECKSUMMED_BITS.contains(&len) {
                let (entropy, checksum) = result.unwrap();
                assert_eq!(entropy.bit_len() + checksum.len(), len);
                assert_eq!(checksum.len(), len / 32);
            } else {
                assert_eq!(result.unwrap_err(), MnemonicError::InvalidBitLength(len));
            }
        }
    }

    #[test]
    fn test_split_recovers_bytes_and_checksum() {
        let mut bits = BitSequence::from_bytes(&[0xa5; 16]);
        for bit in [true, false, true, true] {
            bits.push(bit);
        }
        let (entropy, checksum) = bits_to_entropy_and_checksum(&bits).unwrap();
        assert_eq!(entropy.as_bytes(), &[0xa5; 16]);
        assert_eq!(checksum.bits().to_string(), "1011");
    }

    #[test]
    fn test_flip() {
        let mut bits = BitSequence::from_bytes(&[0x00]);
        assert!(bits.flip(7));
        assert_eq!(bits.to_string(), "00000001");
        assert!(!bits.flip(8));
    }
}
