//! Seed derivation from a mnemonic sentence and passphrase.
//!
//! Seed = PBKDF2-HMAC-SHA512(password = NFKD(sentence),
//! salt = "mnemonic" + NFKD(passphrase), c = 2048, dkLen = 64)

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count fixed by BIP39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix prepended to the passphrase
pub const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed for wallet key derivation.
///
/// The seed is securely zeroed from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Derive a seed with the standard PBKDF2 scheme.
    ///
    /// The sentence is not checked against any word list.
    pub fn from_sentence(sentence: &str, passphrase: &str) -> Self {
        Pbkdf2Deriver.derive(sentence, passphrase)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Turns a rendered sentence and passphrase into a seed.
pub trait SeedDeriver {
    fn derive(&self, sentence: &str, passphrase: &str) -> Seed;
}

/// BIP39 PBKDF2-HMAC-SHA512 deriver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2Deriver;

impl SeedDeriver for Pbkdf2Deriver {
    fn derive(&self, sentence: &str, passphrase: &str) -> Seed {
        let mut password: String = sentence.nfkd().collect();
        let mut salt = String::with_capacity(SALT_PREFIX.len() + passphrase.len());
        salt.push_str(SALT_PREFIX);
        salt.extend(passphrase.nfkd());

        let mut seed = [0u8; SEED_LEN];
        pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);

        password.zeroize();
        salt.zeroize();
        tracing::trace!("Derived seed");
        Seed(seed)
    }
}
