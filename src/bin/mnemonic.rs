//! `mnemonic` CLI binary entrypoint.
//!
//! Generates, validates and recovers BIP39 mnemonic sentences.

use mnemonic_rs::cli::{self, utils::print_error};

fn main() {
    if let Err(e) = cli::run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
