//! File appender implementation

use crate::core::{Appender, Formatter, LoggerError, Result, Sink, Threshold};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Builds [`Appender`]s that write to a file.
///
/// The file is opened once, in [`build`](Self::build), and stays open for the
/// life of the appender. Lines are appended by default; `truncate(true)`
/// empties the file first.
///
/// # Example
///
/// ```no_run
/// use rust_named_logger::appenders::FileAppender;
///
/// let appender = FileAppender::builder("audit", "/var/log/app/audit.log")
///     .truncate(true)
///     .build()
///     .unwrap();
/// ```
pub struct FileAppender {
    name: String,
    path: PathBuf,
    truncate: bool,
    level: Option<Threshold>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl FileAppender {
    pub fn builder(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            truncate: false,
            level: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<Threshold>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn build(self) -> Result<Appender> {
        let mut options = OpenOptions::new();
        options.create(true);
        if self.truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let file = options.open(&self.path).map_err(|e| {
            LoggerError::file_appender(self.path.display().to_string(), e.to_string(), e)
        })?;

        let mut appender = Appender::new(self.name, Sink::File(file));
        if let Some(level) = self.level {
            appender = appender.with_level(level);
        }
        if let Some(formatter) = self.formatter {
            appender = appender.with_formatter(formatter);
        }
        Ok(appender)
    }
}
