//! `generate` command: create a mnemonic from random or supplied entropy.

use crate::cli::utils::{print_info, print_warning, user_message, word_table};
use crate::config::Config;
use crate::entropy::{bits_for_word_count, Entropy};
use crate::mnemonic::Mnemonic;
use clap::Args;

/// Arguments for `generate`
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Entropy length in bits (128, 160, 192, 224, 256)
    #[arg(short, long, conflicts_with_all = ["words", "entropy"])]
    pub bits: Option<usize>,

    /// Number of words (12, 15, 18, 21, 24)
    #[arg(short, long, conflicts_with = "entropy")]
    pub words: Option<usize>,

    /// Encode this hex entropy instead of generating random entropy
    #[arg(long)]
    pub entropy: Option<String>,

    /// Print only the sentence
    #[arg(long)]
    pub plain: bool,
}

impl GenerateArgs {
    /// Entropy length to generate: --bits, then --words, then the config.
    pub fn entropy_bits(&self, config: &Config) -> anyhow::Result<usize> {
        if let Some(bits) = self.bits {
            return Ok(bits);
        }
        if let Some(words) = self.words {
            return bits_for_word_count(words).map_err(|e| anyhow::anyhow!(user_message(&e)));
        }
        Ok(config.entropy_bits)
    }
}

/// Execute `generate`
pub fn execute(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let mnemonic = match &args.entropy {
        Some(hex) => Entropy::from_hex(hex)
            .and_then(|entropy| Mnemonic::from_entropy(&entropy, config.language)),
        None => Mnemonic::random(args.entropy_bits(config)?, config.language),
    }
    .map_err(|e| anyhow::anyhow!(user_message(&e)))?;

    if args.plain {
        println!("{}", mnemonic.sentence());
        return Ok(());
    }

    print_info(&format!(
        "{} words ({})",
        mnemonic.word_count(),
        mnemonic.language()
    ));
    println!("{}", word_table(mnemonic.words()));
    println!();
    println!("{}", mnemonic.sentence());
    println!();
    print_warning("IMPORTANT: Write this sentence down and store it securely!");

    Ok(())
}
