//! Command-line interface for the `mnemonic` binary.
//!
//! # Commands
//!
//! - `generate` - Create a sentence from random or supplied entropy
//! - `validate` - Check a sentence's words and checksum
//! - `entropy` - Recover the entropy behind a sentence
//! - `seed` - Derive the 64-byte seed from a sentence and passphrase

use crate::config::Config;
use crate::language::Language;
use crate::logging::{self, LogFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod utils;

/// BIP39 mnemonic tool
#[derive(Parser)]
#[command(name = "mnemonic")]
#[command(version)]
#[command(about = "Generate, validate and recover BIP39 mnemonic sentences", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Word-list language (english, japanese, spanish, ...)
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log format (text, json, compact)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new mnemonic sentence
    #[command(alias = "g")]
    Generate(commands::generate::GenerateArgs),

    /// Validate a mnemonic sentence
    #[command(alias = "v")]
    Validate(commands::recover::SentenceArgs),

    /// Print the entropy encoded by a mnemonic sentence
    #[command(alias = "e")]
    Entropy(commands::recover::SentenceArgs),

    /// Derive the seed for a mnemonic sentence
    #[command(alias = "s")]
    Seed(commands::seed::SeedArgs),
}

impl Cli {
    /// Effective configuration: defaults, then config file, then
    /// environment, then command-line flags.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?.apply_env(),
            None => Config::from_env(),
        };

        if let Some(language) = self.language {
            config.language = language;
        }
        if self.debug {
            config.logging.debug = true;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        Ok(config)
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init_logging(&config.logging);

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, &config),
        Commands::Validate(args) => commands::recover::validate(args, &config),
        Commands::Entropy(args) => commands::recover::entropy(args, &config),
        Commands::Seed(args) => commands::seed::execute(args, &config),
    }
}
