//! Entropy <-> word encoding.
//!
//! Encoding: entropy -> checksummed bits -> 11-bit indices -> words.
//! Decoding runs the same steps backwards and stops at the entropy/checksum
//! split; comparing the checksums is the validator's job.

use crate::bits::{bits_to_entropy_and_checksum, BitSequence, WordIndex};
use crate::checksum::{append_checksum, Checksum};
use crate::entropy::{validate_length, Entropy};
use crate::error::{MnemonicError, Result};
use crate::language::{Language, ASCII_SPACE};
use crate::mnemonic::Mnemonic;
use unicode_normalization::UnicodeNormalization;

/// Encode `entropy` as a mnemonic in `language`.
///
/// # Example
/// ```
/// use mnemonic_rs::{codec, Entropy, Language};
/// let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
/// let mnemonic = codec::encode(&entropy, Language::English).unwrap();
/// assert_eq!(mnemonic.words()[11], "about");
/// ```
pub fn encode(entropy: &Entropy, language: Language) -> Result<Mnemonic> {
    validate_length(entropy.bit_len())?;

    let list = language.word_list()?;
    let bits = append_checksum(entropy);
    let indices = bits.word_indices()?;

    let mut words = Vec::with_capacity(indices.len());
    for index in indices {
        // A short list here means a corrupted asset, not bad input
        let word = list
            .lookup_word(index.into())
            .map_err(|_| MnemonicError::UnknownIndex(index.value()))?;
        words.push(word.to_string());
    }

    tracing::debug!(
        language = %language,
        words = words.len(),
        "Encoded entropy as mnemonic"
    );
    Ok(Mnemonic::from_parts(words, language))
}

/// NFKD form of a typed sentence, the form every word list is stored in.
///
/// Composed input (`"\u{e1}baco"`, precomposed Hangul, voiced kana) maps onto
/// the list spelling. U+3000 becomes an ASCII space.
pub fn normalize_sentence(sentence: &str) -> String {
    sentence.nfkd().collect()
}

/// Split a sentence into words using the language's separator.
///
/// Surrounding whitespace and empty fragments from repeated separators are
/// dropped; the number of real words is never changed. Japanese sentences
/// may use either the ideographic or the ASCII space.
pub fn split_sentence(language: Language, sentence: &str) -> Vec<&str> {
    let separator = language.separator();
    sentence
        .trim()
        .split(|c: char| c == separator || (language == Language::Japanese && c == ASCII_SPACE))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Recover entropy and the transmitted checksum from `words`.
///
/// Stops at the first word missing from the list.
pub fn decode<S: AsRef<str>>(language: Language, words: &[S]) -> Result<(Entropy, Checksum)> {
    let list = language.word_list()?;

    let indices = words
        .iter()
        .map(|word| list.lookup_index(word.as_ref()))
        .collect::<Result<Vec<WordIndex>>>()?;

    let bits = BitSequence::from_word_indices(&indices);
    bits_to_entropy_and_checksum(&bits)
}

/// Normalize and split `sentence`, then decode it.
pub fn decode_sentence(language: Language, sentence: &str) -> Result<(Entropy, Checksum)> {
    let normalized = normalize_sentence(sentence);
    decode(language, &split_sentence(language, &normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::VALID_ENTROPY_BITS;

    const ZERO_SENTENCE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_encode_zero_vector() {
        let entropy = Entropy::from_bytes(vec![0u8; 16]);
        let mnemonic = encode(&entropy, Language::English).unwrap();
        assert_eq!(mnemonic.sentence(), ZERO_SENTENCE);
    }

    #[test]
    fn test_encode_word_counts() {
        for bits in VALID_ENTROPY_BITS {
            let entropy = Entropy::from_bytes(vec![0x5a; bits / 8]);
            let mnemonic = encode(&entropy, Language::English).unwrap();
            assert_eq!(mnemonic.word_count(), bits * 3 / 32);
        }
    }

    #[test]
    fn test_encode_rejects_unencodable_lengths() {
        // 64 bits + 2 checksum bits is a multiple of 11 but not a valid length
        for bytes in [0usize, 8, 12, 17, 33, 64] {
            let entropy = Entropy::from_bytes(vec![0u8; bytes]);
            assert_eq!(
                encode(&entropy, Language::English).unwrap_err(),
                MnemonicError::InvalidLength(bytes * 8)
            );
        }
    }

    #[test]
    fn test_decode_zero_vector() {
        let (entropy, checksum) = decode_sentence(Language::English, ZERO_SENTENCE).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 16]);
        assert_eq!(checksum, Checksum::compute(&entropy));
    }

    #[test]
    fn test_decode_wrong_word_count() {
        let sentence = format!("{} abandon", ZERO_SENTENCE);
        assert_eq!(
            decode_sentence(Language::English, &sentence).unwrap_err(),
            MnemonicError::InvalidBitLength(143)
        );
        assert_eq!(
            decode_sentence(Language::English, "abandon").unwrap_err(),
            MnemonicError::InvalidBitLength(11)
        );
        assert_eq!(
            decode_sentence(Language::English, "").unwrap_err(),
            MnemonicError::InvalidBitLength(0)
        );
    }

    #[test]
    fn test_decode_fails_fast_on_first_unknown_word() {
        let sentence = "abandon notaword abandon alsobad abandon abandon abandon abandon abandon abandon abandon about";
        assert_eq!(
            decode_sentence(Language::English, sentence).unwrap_err(),
            MnemonicError::UnknownWord("notaword".to_string())
        );
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        let sentence = ZERO_SENTENCE.replacen("abandon", "Abandon", 1);
        assert_eq!(
            decode_sentence(Language::English, &sentence).unwrap_err(),
            MnemonicError::UnknownWord("Abandon".to_string())
        );
    }

    #[test]
    fn test_split_sentence_ascii() {
        let words = split_sentence(Language::English, "  legal  winner thank ");
        assert_eq!(words, vec!["legal", "winner", "thank"]);
    }

    #[test]
    fn test_split_sentence_japanese() {
        let words = split_sentence(Language::Japanese, "あいこくしん\u{3000}あいさつ あいだ");
        assert_eq!(words, vec!["あいこくしん", "あいさつ", "あいだ"]);

        // Ideographic space is not a separator for other languages
        let words = split_sentence(Language::English, "abandon\u{3000}about");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_decode_composed_input() {
        for language in [Language::Spanish, Language::French, Language::Japanese, Language::Korean] {
            let entropy = Entropy::from_bytes(vec![0x3c; 32]);
            let mnemonic = encode(&entropy, language).unwrap();
            let composed: String = mnemonic.sentence().nfc().collect();

            let (decoded, checksum) = decode_sentence(language, &composed).unwrap();
            assert_eq!(decoded, entropy, "{}", language);
            assert_eq!(checksum, Checksum::compute(&entropy));
        }
    }

    #[test]
    fn test_normalize_sentence_maps_ideographic_space() {
        assert_eq!(normalize_sentence("a\u{3000}b"), "a b");
        assert_eq!(normalize_sentence("\u{e1}baco"), "a\u{301}baco");
    }

    #[test]
    fn test_japanese_round_trip() {
        let entropy = Entropy::from_bytes(vec![0x7f; 32]);
        let mnemonic = encode(&entropy, Language::Japanese).unwrap();
        let sentence = mnemonic.sentence();
        assert_eq!(sentence.matches('\u{3000}').count(), 23);
        assert!(!sentence.contains(' '));

        let (decoded, checksum) = decode_sentence(Language::Japanese, &sentence).unwrap();
        assert_eq!(decoded, entropy);
        assert_eq!(checksum, Checksum::compute(&entropy));
    }
}
