//! `seed` command: derive the wallet seed for a sentence.

use crate::cli::commands::recover::{recover, SentenceArgs};
use crate::cli::utils::prompt_passphrase;
use crate::config::Config;
use clap::Args;

/// Arguments for `seed`
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Passphrase mixed into the seed (default: empty)
    #[arg(short, long)]
    pub passphrase: Option<String>,

    /// Prompt for the passphrase without echoing it
    #[arg(long, conflicts_with = "passphrase")]
    pub prompt: bool,

    #[command(flatten)]
    pub sentence: SentenceArgs,
}

impl SeedArgs {
    fn passphrase(&self) -> anyhow::Result<String> {
        self.passphrase_or(|| prompt_passphrase("Passphrase"))
    }

    /// `--passphrase`, the prompted passphrase with `--prompt`, or empty.
    fn passphrase_or<F>(&self, prompt: F) -> anyhow::Result<String>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        if self.prompt {
            prompt()
        } else {
            Ok(self.passphrase.clone().unwrap_or_default())
        }
    }
}

/// Execute `seed`
pub fn execute(args: SeedArgs, config: &Config) -> anyhow::Result<()> {
    let mnemonic = recover(&args.sentence.sentence()?, config)?;
    let seed = mnemonic.generate_seed(&args.passphrase()?);
    println!("{}", seed.to_hex());
    Ok(())
}
