//! Configuration for mnemonic generation and the CLI.
//!
//! Sources, lowest precedence first: defaults, a JSON file, environment
//! variables, then explicit builder calls / command-line flags.

use crate::entropy::{bits_for_word_count, validate_length};
use crate::error::MnemonicError;
use crate::language::Language;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default entropy length (12 words)
pub const DEFAULT_ENTROPY_BITS: usize = 128;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] MnemonicError),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word-list language for generated and parsed sentences
    pub language: Language,
    /// Entropy length used when generating
    pub entropy_bits: usize,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
            entropy_bits: DEFAULT_ENTROPY_BITS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_entropy_bits(mut self, bits: usize) -> Self {
        self.entropy_bits = bits;
        self
    }

    /// Set the entropy length from a sentence word count.
    pub fn with_word_count(mut self, words: usize) -> Result<Self, ConfigError> {
        self.entropy_bits = bits_for_word_count(words)?;
        Ok(self)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.logging.debug = debug;
        self
    }

    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// - `MNEMONIC_LANGUAGE`: language name (english, japanese, ...)
    /// - `MNEMONIC_ENTROPY_BITS`: 128, 160, 192, 224 or 256
    /// - logging variables, see [`LoggingConfig::apply_env`]
    ///
    /// Unparseable values are ignored.
    pub fn apply_env(mut self) -> Self {
        if let Ok(language) = std::env::var("MNEMONIC_LANGUAGE") {
            if let Ok(l) = language.parse() {
                self.language = l;
            }
        }

        if let Ok(bits) = std::env::var("MNEMONIC_ENTROPY_BITS") {
            if let Ok(b) = bits.parse() {
                self.entropy_bits = b;
            }
        }

        self.logging = self.logging.apply_env();
        self
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Check that the configured entropy length can be encoded.
    pub fn validate(&self) -> Result<(), MnemonicError> {
        validate_length(self.entropy_bits)
    }
}
