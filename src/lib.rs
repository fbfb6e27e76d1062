//! # Rust Named Logger
//!
//! Hierarchical, multi-appender logging. Named loggers emit leveled messages
//! that pass through three filters before anything is written:
//!
//! 1. the root level held by the [`Registry`],
//! 2. the logger's own level (falling back to the root level),
//! 3. each appender's own level (also falling back to the root level).
//!
//! A message is written by an appender only when both the logger's and that
//! appender's effective levels admit it.
//!
//! ```
//! use rust_named_logger::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let registry = Registry::new();
//! registry.set_root_level(LogLevel::Info);
//! registry.add_appender(ConsoleAppender::builder("console").build());
//!
//! let svc = registry.logger("svc");
//! svc.debug("not shown")?;
//! svc.info("shown")?;
//! # Ok(())
//! # }
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
    pub use crate::config::{load_config, LoggingConfig};
    pub use crate::core::{
        loggable, Appender, ColorFormatter, Formatter, FormatterKind, LogLevel, Logger,
        LoggerError, PlainFormatter, Registry, Result, Sink, Threshold, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
pub use config::{load_config, AppenderConfig, AppenderType, LoggingConfig, ROOT_LOGGER};
pub use core::{
    loggable, Appender, ColorFormatter, Formatter, FormatterKind, LogLevel, Logger, LoggerError,
    PlainFormatter, Registry, Result, Sink, Threshold, TimestampFormat,
};
