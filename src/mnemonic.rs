//! BIP39 mnemonic sentences.
//!
//! A [`Mnemonic`] is an immutable list of words in one [`Language`]. It is
//! built either by encoding entropy or by recovering a validated sentence,
//! and it hands its rendered sentence to a seed deriver.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use crate::checksum::Checksum;
use crate::codec;
use crate::entropy::Entropy;
use crate::error::Result;
use crate::language::Language;
use crate::seed::{Pbkdf2Deriver, Seed, SeedDeriver};
use crate::validator;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A BIP39 mnemonic sentence.
///
/// The words are securely zeroed from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
    #[zeroize(skip)]
    language: Language,
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose the actual words in debug output
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .field("language", &self.language)
            .finish()
    }
}

impl Mnemonic {
    pub(crate) fn from_parts(words: Vec<String>, language: Language) -> Self {
        Self { words, language }
    }

    /// Encode existing entropy.
    ///
    /// # Example
    /// ```
    /// use mnemonic_rs::{Entropy, Language, Mnemonic};
    /// let entropy = Entropy::from_hex("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f").unwrap();
    /// let mnemonic = Mnemonic::from_entropy(&entropy, Language::English).unwrap();
    /// assert_eq!(mnemonic.word_count(), 12);
    /// ```
    pub fn from_entropy(entropy: &Entropy, language: Language) -> Result<Self> {
        codec::encode(entropy, language)
    }

    /// Encode entropy given as a hex string.
    pub fn from_hex(hex: &str, language: Language) -> Result<Self> {
        codec::encode(&Entropy::from_hex(hex)?, language)
    }

    /// Generate a mnemonic from `length_bits` of fresh random entropy.
    ///
    /// # Example
    /// ```
    /// use mnemonic_rs::{Language, Mnemonic};
    /// let mnemonic = Mnemonic::random(256, Language::English).unwrap();
    /// assert_eq!(mnemonic.word_count(), 24);
    /// ```
    pub fn random(length_bits: usize, language: Language) -> Result<Self> {
        let entropy = Entropy::random(length_bits)?;
        codec::encode(&entropy, language)
    }

    /// Generate a mnemonic with the specified number of words.
    pub fn random_with_words(word_count: usize, language: Language) -> Result<Self> {
        let entropy = Entropy::random_for_words(word_count)?;
        codec::encode(&entropy, language)
    }

    /// Parse and validate a sentence. Equivalent to [`validator::recover`].
    pub fn from_sentence(language: Language, sentence: &str) -> Result<Self> {
        validator::recover(language, sentence)
    }

    /// Words joined by the language separator.
    pub fn sentence(&self) -> String {
        let separator = self.language.separator().to_string();
        self.words.join(separator.as_str())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Recover the entropy and embedded checksum.
    pub fn decode(&self) -> Result<(Entropy, Checksum)> {
        codec::decode(self.language, &self.words)
    }

    /// The entropy this mnemonic encodes.
    pub fn to_entropy(&self) -> Result<Entropy> {
        self.decode().map(|(entropy, _)| entropy)
    }

    /// Derive the 64-byte seed with PBKDF2-HMAC-SHA512.
    ///
    /// # Example
    /// ```
    /// use mnemonic_rs::{Language, Mnemonic};
    /// let mnemonic = Mnemonic::random(128, Language::English).unwrap();
    /// let seed = mnemonic.generate_seed("");
    /// assert_eq!(seed.as_bytes().len(), 64);
    /// ```
    pub fn generate_seed(&self, passphrase: &str) -> Seed {
        self.generate_seed_with(&Pbkdf2Deriver, passphrase)
    }

    /// Derive the seed with a caller-supplied deriver.
    ///
    /// The deriver receives the rendered sentence and the passphrase exactly
    /// as given.
    pub fn generate_seed_with<D: SeedDeriver + ?Sized>(&self, deriver: &D, passphrase: &str) -> Seed {
        deriver.derive(&self.sentence(), passphrase)
    }
}
