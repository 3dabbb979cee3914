//! CLI utility functions for terminal interaction and formatting.

use crate::error::MnemonicError;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::{style, Term};
use dialoguer::{Input, Password};

/// Prompt for an optional passphrase (hidden characters). Empty is allowed.
///
/// Fails when there is no terminal to read from.
pub fn prompt_passphrase(message: &str) -> anyhow::Result<String> {
    let passphrase = Password::new()
        .with_prompt(message)
        .allow_empty_password(true)
        .interact()?;
    Ok(passphrase)
}

/// Prompt for a mnemonic sentence.
pub fn prompt_sentence(message: &str) -> anyhow::Result<String> {
    let sentence = Input::<String>::new().with_prompt(message).interact_text()?;
    Ok(sentence)
}

/// Print success message in green.
pub fn print_success(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("✓").green().bold(), message));
}

/// Print error message in red.
pub fn print_error(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✗").red().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

/// Create a styled table for CLI output.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a table with custom headers.
pub fn create_table_with_headers(headers: &[&str]) -> Table {
    let mut table = create_table();
    table.set_header(headers.iter().map(|h| style(*h).bold().to_string()));
    table
}

/// Numbered word table, three columns of (position, word) pairs.
pub fn word_table(words: &[String]) -> Table {
    let mut table = create_table_with_headers(&["#", "Word", "#", "Word", "#", "Word"]);
    for (row, chunk) in words.chunks(3).enumerate() {
        let mut cells = Vec::with_capacity(6);
        for (col, word) in chunk.iter().enumerate() {
            cells.push((row * 3 + col + 1).to_string());
            cells.push(word.clone());
        }
        table.add_row(cells);
    }
    table
}

/// Message shown to the user for a failed mnemonic operation.
///
/// Unknown words are named so typos can be fixed; every other failure gets
/// the same generic text so nothing leaks about which position was wrong.
pub fn user_message(e: &MnemonicError) -> String {
    match e {
        MnemonicError::UnknownWord(word) => format!("Unknown word: '{}'", word),
        MnemonicError::MalformedHex(msg) => format!("Invalid hex entropy: {}", msg),
        MnemonicError::InvalidLength(_) | MnemonicError::InvalidWordCount(_) => e.to_string(),
        MnemonicError::SourceUnavailable(_) | MnemonicError::WordListIntegrity { .. } => {
            e.to_string()
        }
        _ => "Invalid mnemonic".to_string(),
    }
}
