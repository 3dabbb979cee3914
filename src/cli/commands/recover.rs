//! `validate` and `entropy` commands: check a sentence and recover what it encodes.

use crate::cli::utils::{print_success, prompt_sentence, user_message};
use crate::config::Config;
use crate::mnemonic::Mnemonic;
use crate::validator;
use clap::Args;

/// A sentence given as words, or prompted for when omitted
#[derive(Args, Clone, Debug)]
pub struct SentenceArgs {
    /// Mnemonic words (quoted or unquoted); prompts when omitted
    pub words: Vec<String>,
}

impl SentenceArgs {
    /// The sentence, joined with ASCII spaces (accepted for every language).
    pub fn sentence(&self) -> anyhow::Result<String> {
        self.sentence_or(|| prompt_sentence("Mnemonic"))
    }

    /// The sentence, asking `prompt` for it when no words were given.
    pub fn sentence_or<F>(&self, prompt: F) -> anyhow::Result<String>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        if self.words.is_empty() {
            prompt()
        } else {
            Ok(self.words.join(" "))
        }
    }
}

/// Execute `validate`
pub fn validate(args: SentenceArgs, config: &Config) -> anyhow::Result<()> {
    let sentence = args.sentence()?;
    match validator::validate(config.language, &sentence) {
        Ok(true) => {
            print_success("Mnemonic is valid");
            Ok(())
        }
        Ok(false) => Err(anyhow::anyhow!("Invalid mnemonic")),
        Err(e) => Err(anyhow::anyhow!(user_message(&e))),
    }
}

/// Execute `entropy`
pub fn entropy(args: SentenceArgs, config: &Config) -> anyhow::Result<()> {
    let mnemonic = recover(&args.sentence()?, config)?;
    let entropy = mnemonic
        .to_entropy()
        .map_err(|e| anyhow::anyhow!(user_message(&e)))?;
    println!("{}", entropy.to_hex());
    Ok(())
}

/// Build a mnemonic from `sentence`, naming an unknown word in the error.
pub(crate) fn recover(sentence: &str, config: &Config) -> anyhow::Result<Mnemonic> {
    validator::parse(config.language, sentence).map_err(|e| anyhow::anyhow!(user_message(&e)))
}
