//! Mnemonic validation and recovery.
//!
//! Decoding failures are ordinary outcomes here: a wrong word count or an
//! unknown word is returned to the caller, never raised as a panic.

use crate::checksum::Checksum;
use crate::codec;
use crate::error::{MnemonicError, Result};
use crate::language::Language;
use crate::mnemonic::Mnemonic;

/// Check a sentence's word count, vocabulary and checksum.
///
/// Returns `Ok(true)` for a valid mnemonic, `Ok(false)` on a checksum
/// mismatch, and `Err` with the decode failure (`InvalidBitLength`,
/// `UnknownWord`) otherwise.
///
/// # Example
/// ```
/// use mnemonic_rs::{validator, Language};
/// let sentence = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
/// assert!(validator::validate(Language::English, sentence).unwrap());
///
/// let tampered = sentence.replace("about", "abandon");
/// assert!(!validator::validate(Language::English, &tampered).unwrap());
/// ```
pub fn validate(language: Language, sentence: &str) -> Result<bool> {
    let normalized = codec::normalize_sentence(sentence);
    let words = codec::split_sentence(language, &normalized);
    validate_words(language, &words)
}

/// Boolean form of [`validate`]; any failure counts as invalid.
pub fn is_valid(language: Language, sentence: &str) -> bool {
    matches!(validate(language, sentence), Ok(true))
}

/// Validate a sentence and build a [`Mnemonic`] from its words, keeping the
/// decode failure.
///
/// `UnknownWord` and `InvalidBitLength` come back as is; a checksum mismatch
/// is `InvalidMnemonic`. The words are kept in their list spelling.
pub fn parse(language: Language, sentence: &str) -> Result<Mnemonic> {
    let normalized = codec::normalize_sentence(sentence);
    let words = codec::split_sentence(language, &normalized);

    if !validate_words(language, &words)? {
        return Err(MnemonicError::InvalidMnemonic);
    }
    let words = words.into_iter().map(String::from).collect();
    Ok(Mnemonic::from_parts(words, language))
}

/// Validate a sentence and build a [`Mnemonic`] from its words.
///
/// Every failure collapses into `InvalidMnemonic` so the error says nothing
/// about which word or position was wrong.
pub fn recover(language: Language, sentence: &str) -> Result<Mnemonic> {
    parse(language, sentence).map_err(|e| {
        tracing::debug!(
            language = %language,
            reason = error_kind(&e),
            "Mnemonic rejected"
        );
        MnemonicError::InvalidMnemonic
    })
}

fn validate_words(language: Language, words: &[&str]) -> Result<bool> {
    let (entropy, checksum) = codec::decode(language, words)?;
    Ok(Checksum::compute(&entropy) == checksum)
}

/// Loggable failure category that never includes the offending word.
fn error_kind(e: &MnemonicError) -> &'static str {
    match e {
        MnemonicError::InvalidMnemonic => "checksum mismatch",
        MnemonicError::InvalidBitLength(_) => "invalid word count",
        MnemonicError::UnknownWord(_) => "unknown word",
        MnemonicError::WordListIntegrity { .. } => "word list integrity",
        _ => "decode failure",
    }
}
