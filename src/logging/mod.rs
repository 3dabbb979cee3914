//! Logging setup for the mnemonic library and CLI.
//!
//! The library only emits `tracing` events (never words, entropy or seeds).
//! This module installs a subscriber for them, with text, JSON or compact
//! output and optional daily-rolling file logging.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mnemonic_rs::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::new()
//!     .with_debug(true)
//!     .with_format(LogFormat::Compact);
//! init_logging(&config);
//! ```

pub mod format;

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use format::{CompactFormatter, MnemonicFormatter};

/// Default directory for log files
pub const DEFAULT_LOGGING_DIR: &str = "~/.mnemonic/logs";

/// Static initialization guard to ensure logging is only initialized once
static INIT: Once = Once::new();

/// Flag indicating whether logging has been initialized
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file writer alive for the rest of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS | LEVEL | target | message`
    #[default]
    Text,
    /// Newline-delimited JSON
    Json,
    /// `[LEVEL] message`
    Compact,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!(
                "Invalid log format '{}'. Valid options: text, json, compact",
                s
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable debug-level logging
    pub debug: bool,
    /// Enable trace-level logging (overrides debug)
    pub trace: bool,
    /// Also write logs to a file
    pub record_log: bool,
    /// Directory for log files (supports ~ for home directory)
    pub logging_dir: String,
    /// Output format for log messages
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            trace: false,
            record_log: false,
            logging_dir: DEFAULT_LOGGING_DIR.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.record_log = enabled;
        self
    }

    pub fn with_logging_dir(mut self, dir: impl Into<String>) -> Self {
        self.logging_dir = dir.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// - `MNEMONIC_DEBUG`: enable debug logging (any value)
    /// - `MNEMONIC_TRACE`: enable trace logging (any value)
    /// - `MNEMONIC_LOG_FORMAT`: text, json or compact
    /// - `MNEMONIC_LOG_DIR`: log directory, also turns on file logging
    /// - `RUST_LOG`: standard filter, takes precedence at init time
    pub fn apply_env(mut self) -> Self {
        if std::env::var("MNEMONIC_DEBUG").is_ok() || std::env::var("MNEMONIC_TRACE").is_ok() {
            self.debug = true;
        }

        if std::env::var("MNEMONIC_TRACE").is_ok() {
            self.trace = true;
        }

        if let Ok(format) = std::env::var("MNEMONIC_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        if let Ok(dir) = std::env::var("MNEMONIC_LOG_DIR") {
            self.logging_dir = dir;
            self.record_log = true;
        }

        self
    }

    fn get_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Expand ~ to home directory in paths
    fn expand_path(&self) -> PathBuf {
        let path = &self.logging_dir;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        init_logging_internal(config);
        INITIALIZED.store(true, Ordering::SeqCst);
    });
}

/// Install the global subscriber with default settings.
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

fn init_logging_internal(config: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.get_level().to_string())
    };

    let file_writer = if config.record_log {
        let log_dir = config.expand_path();
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!(
                "Warning: Failed to create log directory {:?}: {}",
                log_dir, e
            );
            None
        } else {
            let file_appender = tracing_appender::rolling::daily(&log_dir, "mnemonic.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);
            Some(non_blocking)
        }
    } else {
        None
    };

    // Console output goes to stderr so stdout stays clean for sentences and seeds
    let result = match config.format {
        LogFormat::Text => {
            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .event_format(MnemonicFormatter)
                    .with_writer(writer)
                    .with_ansi(false)
            });
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .event_format(MnemonicFormatter)
                        .with_writer(io::stderr),
                )
                .with(file_layer)
                .try_init()
        }
        LogFormat::Json => {
            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
            });
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .with(file_layer)
                .try_init()
        }
        LogFormat::Compact => {
            let file_layer = file_writer.map(|writer| {
                fmt::layer()
                    .event_format(CompactFormatter)
                    .with_writer(writer)
                    .with_ansi(false)
            });
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .event_format(CompactFormatter)
                        .with_writer(io::stderr),
                )
                .with(file_layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
    }
}
