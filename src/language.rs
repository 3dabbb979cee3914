//! Supported languages and their word lists.
//!
//! Each language maps to a 2048-word list from the `bip39` crate. The reverse
//! index (word -> position) is built once on first use and then shared
//! immutably for the life of the process.

use crate::bits::{WordIndex, WORD_LIST_SIZE};
use crate::error::{MnemonicError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Word separator used by every language except Japanese
pub const ASCII_SPACE: char = ' ';

/// Word separator used by Japanese sentences (U+3000)
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Mnemonic word-list language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    SimplifiedChinese,
    TraditionalChinese,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
        Language::Czech,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
    ];

    /// Stable lowercase name, also accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::SimplifiedChinese => "simplified-chinese",
            Language::TraditionalChinese => "traditional-chinese",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
        }
    }

    /// Character placed between words when rendering a sentence
    pub fn separator(&self) -> char {
        match self {
            Language::Japanese => IDEOGRAPHIC_SPACE,
            _ => ASCII_SPACE,
        }
    }

    /// The word list for this language.
    ///
    /// Fails with `WordListIntegrity` if the bundled list is not 2048 unique
    /// words. The check runs once; the result is cached.
    pub fn word_list(&self) -> Result<&'static WordList> {
        let tables = WORD_LISTS.get_or_init(|| {
            Language::ALL
                .iter()
                .map(|language| (*language, WordList::build(*language)))
                .collect()
        });
        match tables.get(self) {
            Some(Ok(list)) => Ok(list),
            Some(Err(e)) => Err(e.clone()),
            None => Err(MnemonicError::WordListIntegrity {
                language: self.name().to_string(),
                reason: "no word list registered".to_string(),
            }),
        }
    }

    fn bip39(&self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
            Language::SimplifiedChinese => bip39::Language::SimplifiedChinese,
            Language::TraditionalChinese => bip39::Language::TraditionalChinese,
            Language::Czech => bip39::Language::Czech,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Spanish => bip39::Language::Spanish,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "english" | "en" => Ok(Language::English),
            "simplified-chinese" | "chinese-simplified" | "zh-hans" => {
                Ok(Language::SimplifiedChinese)
            }
            "traditional-chinese" | "chinese-traditional" | "zh-hant" => {
                Ok(Language::TraditionalChinese)
            }
            "czech" | "cs" => Ok(Language::Czech),
            "french" | "fr" => Ok(Language::French),
            "italian" | "it" => Ok(Language::Italian),
            "japanese" | "ja" => Ok(Language::Japanese),
            "korean" | "ko" => Ok(Language::Korean),
            "spanish" | "es" => Ok(Language::Spanish),
            _ => Err(format!(
                "Invalid language '{}'. Valid options: {}",
                s,
                Language::ALL.map(|l| l.name()).join(", ")
            )),
        }
    }
}

static WORD_LISTS: OnceLock<HashMap<Language, Result<WordList>>> = OnceLock::new();

/// Bidirectional `index <-> word` mapping for one language.
#[derive(Debug)]
pub struct WordList {
    language: Language,
    words: &'static [&'static str],
    index: HashMap<&'static str, u16>,
}

impl WordList {
    fn build(language: Language) -> Result<Self> {
        let words: &'static [&'static str] = language.bip39().word_list();
        let integrity = |reason: String| MnemonicError::WordListIntegrity {
            language: language.name().to_string(),
            reason,
        };

        if words.len() != WORD_LIST_SIZE {
            return Err(integrity(format!(
                "expected {} words, found {}",
                WORD_LIST_SIZE,
                words.len()
            )));
        }

        let index: HashMap<&'static str, u16> = words
            .iter()
            .enumerate()
            .map(|(i, word)| (*word, i as u16))
            .collect();
        if index.len() != WORD_LIST_SIZE {
            return Err(integrity(format!(
                "{} duplicate words",
                WORD_LIST_SIZE - index.len()
            )));
        }

        tracing::debug!(language = %language, "Loaded word list");
        Ok(Self {
            language,
            words,
            index,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Word at `index`, failing with `IndexOutOfRange` past 2047.
    pub fn lookup_word(&self, index: usize) -> Result<&'static str> {
        self.words
            .get(index)
            .copied()
            .ok_or(MnemonicError::IndexOutOfRange(index))
    }

    /// Position of `word`, failing with `UnknownWord` if absent.
    ///
    /// Lists are stored in NFKD; a composed spelling of a listed word is
    /// found through its NFKD form.
    pub fn lookup_index(&self, word: &str) -> Result<WordIndex> {
        let found = match self.index.get(word) {
            Some(i) => Some(*i),
            None => {
                let normalized: String = word.nfkd().collect();
                self.index.get(normalized.as_str()).copied()
            }
        };
        match found {
            Some(i) => WordIndex::new(i as usize),
            None => Err(MnemonicError::unknown_word(word)),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
