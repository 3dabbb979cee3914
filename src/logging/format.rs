//! Event formatters that lay out the fields the mnemonic pipeline records.
//!
//! Library events carry `language`, `words`, `bits` and `reason` fields.
//! Both formatters fold them into a bracketed summary after the message,
//! e.g. `Encoded entropy as mnemonic [korean, 24 words]`. Any other field
//! is appended as `key=value`.

use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Timestamped formatter.
///
/// Output format: `YYYY-MM-DD HH:MM:SS | LEVEL | message [summary] extra=value`
///
/// # Example Output
/// ```text
/// 2024-01-15 10:30:45 | DEBUG | Mnemonic rejected [japanese, unknown word]
/// ```
pub struct MnemonicFormatter;

impl<S, N> FormatEvent<S, N> for MnemonicFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = MnemonicFields::default();
        event.record(&mut fields);

        writeln!(
            writer,
            "{} | {} | {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            format_level(*event.metadata().level()),
            fields
        )
    }
}

/// Minimal formatter: `[LEVEL] message [summary]`
pub struct CompactFormatter;

impl<S, N> FormatEvent<S, N> for CompactFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = MnemonicFields::default();
        event.record(&mut fields);

        writeln!(
            writer,
            "[{}] {}",
            format_level(*event.metadata().level()).trim(),
            fields
        )
    }
}

/// Format log level with fixed width for alignment
fn format_level(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO ",
        Level::WARN => "WARN ",
        Level::ERROR => "ERROR",
    }
}

/// Fields of one event, with the pipeline's own fields pulled out.
#[derive(Debug, Default, PartialEq)]
struct MnemonicFields {
    message: String,
    language: Option<String>,
    words: Option<u64>,
    bits: Option<u64>,
    reason: Option<String>,
    extra: Vec<(&'static str, String)>,
}

impl MnemonicFields {
    fn record_value(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "language" => self.language = Some(value),
            "reason" => self.reason = Some(value),
            name => self.extra.push((name, value)),
        }
    }
}

impl Visit for MnemonicFields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "words" => self.words = Some(value),
            "bits" => self.bits = Some(value),
            _ => self.record_value(field, value.to_string()),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match u64::try_from(value) {
            Ok(v) => self.record_u64(field, v),
            Err(_) => self.record_value(field, value.to_string()),
        }
    }
}

impl fmt::Display for MnemonicFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        let mut summary = Vec::with_capacity(4);
        if let Some(language) = &self.language {
            summary.push(language.clone());
        }
        if let Some(words) = self.words {
            summary.push(format!("{} words", words));
        }
        if let Some(bits) = self.bits {
            summary.push(format!("{} bits", bits));
        }
        if let Some(reason) = &self.reason {
            summary.push(reason.clone());
        }
        if !summary.is_empty() {
            write!(f, " [{}]", summary.join(", "))?;
        }

        for (name, value) in &self.extra {
            write!(f, " {}={}", name, value)?;
        }
        Ok(())
    }
}
