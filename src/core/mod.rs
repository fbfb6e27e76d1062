//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod timestamp;

pub use appender::{Appender, Sink};
pub use error::{LoggerError, Result};
pub use formatter::{ColorFormatter, Formatter, FormatterKind, PlainFormatter};
pub use log_level::{loggable, LogLevel, Threshold};
pub use logger::Logger;
pub use registry::Registry;
pub use timestamp::TimestampFormat;
