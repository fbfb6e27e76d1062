//! Console appender implementation

use crate::core::{Appender, Formatter, Sink, Threshold};
use std::sync::Arc;

/// Which standard stream a console appender writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Builds console [`Appender`]s.
///
/// # Example
///
/// ```
/// use rust_named_logger::appenders::ConsoleAppender;
/// use rust_named_logger::{ColorFormatter, LogLevel};
/// use std::sync::Arc;
///
/// let appender = ConsoleAppender::builder("errors")
///     .stderr()
///     .level(LogLevel::Error)
///     .formatter(Arc::new(ColorFormatter::new()))
///     .build();
/// assert_eq!(appender.name(), "errors");
/// ```
pub struct ConsoleAppender {
    name: String,
    target: ConsoleTarget,
    level: Option<Threshold>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl ConsoleAppender {
    pub fn builder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: ConsoleTarget::Stdout,
            level: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn stderr(self) -> Self {
        self.target(ConsoleTarget::Stderr)
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<Threshold>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Defaults to the plain formatter when not set.
    #[must_use]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn build(self) -> Appender {
        let sink = match self.target {
            ConsoleTarget::Stdout => Sink::Stdout,
            ConsoleTarget::Stderr => Sink::Stderr,
        };

        let mut appender = Appender::new(self.name, sink);
        if let Some(level) = self.level {
            appender = appender.with_level(level);
        }
        if let Some(formatter) = self.formatter {
            appender = appender.with_formatter(formatter);
        }
        appender
    }
}
