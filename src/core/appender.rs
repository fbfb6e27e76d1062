//! Appenders: a named sink with its own level filter and formatter

use super::{
    error::{LoggerError, Result},
    formatter::{Formatter, PlainFormatter},
    log_level::{loggable, LogLevel, Threshold},
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// Where an appender's lines end up.
pub enum Sink {
    Stdout,
    Stderr,
    File(File),
    /// Any other writer, e.g. an in-memory buffer or a socket wrapper
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(Box::new(writer))
    }

    /// Write one complete line. Nothing is buffered on our side.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()
            }
            Sink::File(file) => file.write_all(line.as_bytes()),
            Sink::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
            Sink::File(file) => f.debug_tuple("File").field(file).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

pub struct Appender {
    name: String,
    level: RwLock<Option<Threshold>>,
    formatter: RwLock<Arc<dyn Formatter>>,
    sink: Mutex<Sink>,
}

impl Appender {
    /// Create an appender with no level of its own and the plain formatter.
    pub fn new(name: impl Into<String>, sink: Sink) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(None),
            formatter: RwLock::new(Arc::new(PlainFormatter::new())),
            sink: Mutex::new(sink),
        }
    }

    #[must_use]
    pub fn with_level(self, level: impl Into<Threshold>) -> Self {
        *self.level.write() = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_formatter(self, formatter: Arc<dyn Formatter>) -> Self {
        *self.formatter.write() = formatter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Option<Threshold> {
        self.level.read().clone()
    }

    pub fn set_level(&self, level: impl Into<Threshold>) {
        *self.level.write() = Some(level.into());
    }

    /// Go back to following the root level.
    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    pub fn formatter(&self) -> Arc<dyn Formatter> {
        self.formatter.read().clone()
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        *self.formatter.write() = formatter;
    }

    pub fn accepts(&self, level: LogLevel, root: &Threshold) -> bool {
        loggable(level, self.level.read().as_ref(), root)
    }

    /// Filter, format and write one event.
    ///
    /// Runs its own level check even though the dispatching logger already
    /// filtered: both levels must admit the message.
    pub fn log(
        &self,
        logger_name: &str,
        level: LogLevel,
        message: &str,
        root: &Threshold,
    ) -> Result<()> {
        if !self.accepts(level, root) {
            return Ok(());
        }

        let formatter = self.formatter();
        let mut line = formatter.format(logger_name, level, message);
        line.push('\n');

        self.sink.lock().write_line(&line).map_err(|e| {
            LoggerError::io_operation(
                format!("writing to appender '{}'", self.name),
                e.to_string(),
                e,
            )
        })
    }
}

impl fmt::Debug for Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appender")
            .field("name", &self.name)
            .field("level", &*self.level.read())
            .field("sink", &*self.sink.lock())
            .finish_non_exhaustive()
    }
}
