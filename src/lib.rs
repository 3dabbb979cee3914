//! BIP39 mnemonic sentences.
//!
//! Converts entropy into a checksummed sentence of words from a 2048-word
//! list, validates and recovers sentences, and derives the wallet seed.
//!
//! ```
//! use mnemonic_rs::{validator, Entropy, Language, Mnemonic};
//!
//! let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
//! let mnemonic = Mnemonic::from_entropy(&entropy, Language::English).unwrap();
//! assert_eq!(
//!     mnemonic.sentence(),
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//!
//! let recovered = validator::recover(Language::English, &mnemonic.sentence()).unwrap();
//! assert_eq!(recovered.to_entropy().unwrap(), entropy);
//!
//! let seed = recovered.generate_seed("TREZOR");
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```

pub mod bits;
pub mod checksum;
pub mod cli;
pub mod codec;
pub mod config;
pub mod entropy;
pub mod error;
pub mod language;
pub mod logging;
pub mod mnemonic;
pub mod seed;
pub mod validator;

pub use bits::{bits_to_entropy_and_checksum, BitSequence, WordIndex, WORD_BITS, WORD_LIST_SIZE};
pub use checksum::{append_checksum, Checksum};
pub use config::{Config, ConfigError};
pub use entropy::{Entropy, VALID_ENTROPY_BITS};
pub use error::{MnemonicError, Result};
pub use language::{Language, WordList};
pub use logging::{init_default_logging, init_logging, is_initialized, LogFormat, LoggingConfig};
pub use mnemonic::Mnemonic;
pub use seed::{Pbkdf2Deriver, Seed, SeedDeriver};
pub use validator::{is_valid, parse, recover, validate};
