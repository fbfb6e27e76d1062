//! Formatters turn a log event into the line an appender writes
//!
//! Any type implementing [`Formatter`] can be attached to an appender,
//! including plain closures:
//!
//! ```
//! use rust_named_logger::{Formatter, LogLevel};
//!
//! let terse = |logger: &str, level: LogLevel, message: &str| {
//!     format!("{}|{}|{}", level, logger, message)
//! };
//! assert_eq!(terse.format("db", LogLevel::Info, "up"), "INFO|db|up");
//! ```

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use std::str::FromStr;
use std::sync::Arc;

const ANSI_RESET: &str = "\x1b[0m";

pub trait Formatter: Send + Sync {
    fn format(&self, logger_name: &str, level: LogLevel, message: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str, LogLevel, &str) -> String + Send + Sync,
{
    fn format(&self, logger_name: &str, level: LogLevel, message: &str) -> String {
        self(logger_name, level, message)
    }
}

/// `<timestamp> <LEVEL> <logger>: <message>`, level padded to five columns.
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter {
    timestamp_format: TimestampFormat,
}

impl PlainFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Formatter for PlainFormatter {
    fn format(&self, logger_name: &str, level: LogLevel, message: &str) -> String {
        format!(
            "{} {:5} {}: {}",
            self.timestamp_format.now(),
            level,
            logger_name,
            message
        )
    }
}

/// The plain layout wrapped in an ANSI foreground color keyed by level.
///
/// Escape codes are always emitted, regardless of whether the sink is a
/// terminal. Levels without a color get no prefix but still get the reset.
#[derive(Debug, Clone, Default)]
pub struct ColorFormatter {
    plain: PlainFormatter,
}

impl ColorFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.plain = self.plain.with_timestamp_format(format);
        self
    }
}

impl Formatter for ColorFormatter {
    fn format(&self, logger_name: &str, level: LogLevel, message: &str) -> String {
        let body = self.plain.format(logger_name, level, message);
        match level.color() {
            Some(color) => format!("\x1b[{}m{}{}", color.to_fg_str(), body, ANSI_RESET),
            None => format!("{}{}", body, ANSI_RESET),
        }
    }
}

/// Names of the built-in formatters, as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatterKind {
    #[default]
    Plain,
    Color,
}

impl FormatterKind {
    pub fn build(self) -> Arc<dyn Formatter> {
        match self {
            FormatterKind::Plain => Arc::new(PlainFormatter::new()),
            FormatterKind::Color => Arc::new(ColorFormatter::new()),
        }
    }
}

impl FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(FormatterKind::Plain),
            "color" | "colour" => Ok(FormatterKind::Color),
            _ => Err(format!("Unknown formatter: '{}'", s)),
        }
    }
}
