//! Named loggers

use super::{
    error::Result,
    log_level::{loggable, LogLevel, Threshold},
    registry::Dispatch,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A named source of log messages.
///
/// Loggers are obtained from a [`Registry`](super::Registry); there is one
/// per name. A logger does no I/O itself: messages that clear its level are
/// handed to every registered appender, each of which filters again.
pub struct Logger {
    name: String,
    level: RwLock<Option<Threshold>>,
    dispatch: Arc<Dispatch>,
}

impl Logger {
    pub(crate) fn new(name: &str, level: Option<Threshold>, dispatch: Arc<Dispatch>) -> Self {
        Self {
            name: name.to_string(),
            level: RwLock::new(level),
            dispatch,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logger's own level, `None` when it follows the root level.
    pub fn level(&self) -> Option<Threshold> {
        self.level.read().clone()
    }

    pub fn set_level(&self, level: impl Into<Threshold>) {
        *self.level.write() = Some(level.into());
    }

    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    /// The level actually used for filtering right now.
    pub fn effective_level(&self) -> Threshold {
        self.level().unwrap_or_else(|| self.dispatch.root_level())
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        loggable(level, self.level.read().as_ref(), &self.dispatch.root_level())
    }

    /// Send `message` to every registered appender if `level` clears this
    /// logger's level.
    ///
    /// All appenders are visited even if one fails; the first write error is
    /// returned.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        let root = self.dispatch.root_level();
        if !loggable(level, self.level.read().as_ref(), &root) {
            return Ok(());
        }

        let message = message.as_ref();
        let mut first_error = None;
        for appender in self.dispatch.appenders() {
            if let Err(e) = appender.log(&self.name, level, message, &root) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn trace(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &*self.level.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::appender::{Appender, Sink};
    use crate::core::error::LoggerError;
    use crate::core::log_level::{LogLevel, Threshold};
    use crate::core::registry::Registry;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Lines(Arc<Mutex<Vec<u8>>>);

    impl Lines {
        fn get(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for Lines {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Registers an appender whose formatter counts how often it is called.
    fn counting_appender(registry: &Registry, name: &str) -> (Lines, Arc<AtomicUsize>) {
        let lines = Lines::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        registry.add_appender(
            Appender::new(name, Sink::writer(lines.clone())).with_formatter(Arc::new(
                move |logger: &str, level: LogLevel, msg: &str| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    format!("{level} {logger}: {msg}")
                },
            )),
        );
        (lines, calls)
    }

    #[test]
    fn test_logger_level_blocks_before_appenders() {
        let registry = Registry::new();
        registry.set_root_level(LogLevel::Trace);
        let (_, a_calls) = counting_appender(&registry, "a");
        let (_, b_calls) = counting_appender(&registry, "b");

        let logger = registry.get_or_create_logger("svc", Some(LogLevel::Warn.into()));
        logger.trace("t").unwrap();
        logger.debug("d").unwrap();
        logger.info("i").unwrap();
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);

        logger.warn("w").unwrap();
        logger.error("e").unwrap();
        assert_eq!(a_calls.load(Ordering::SeqCst), 2);
        assert_eq!(b_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_appender_level_still_applies() {
        let registry = Registry::new();
        let lines = Lines::default();
        registry.add_appender(
            Appender::new("strict", Sink::writer(lines.clone()))
                .with_level(LogLevel::Error)
                .with_formatter(Arc::new(|_: &str, _: LogLevel, msg: &str| msg.to_string())),
        );

        let logger = registry.get_or_create_logger("chatty", Some(LogLevel::Trace.into()));
        for level in LogLevel::ALL {
            logger.log(level, level.to_str()).unwrap();
        }
        assert_eq!(lines.get(), vec!["ERROR".to_string()]);
    }

    #[test]
    fn test_unset_level_tracks_root_changes() {
        let registry = Registry::new();
        let logger = registry.logger("svc");
        assert!(logger.is_enabled(LogLevel::Debug));

        registry.set_root_level(LogLevel::Info);
        assert!(!logger.is_enabled(LogLevel::Debug));
        assert_eq!(logger.level(), None);
        assert_eq!(logger.effective_level(), Threshold::At(LogLevel::Info));

        logger.set_level(LogLevel::Trace);
        assert!(logger.is_enabled(LogLevel::Debug));
        logger.clear_level();
        assert!(!logger.is_enabled(LogLevel::Debug));
    }

    #[test]
    fn test_unrecognized_logger_level_fails_open() {
        let registry = Registry::new();
        registry.set_root_level(LogLevel::Error);
        let (lines, _) = counting_appender(&registry, "a");
        registry
            .get_appender("a")
            .expect("registered")
            .set_level("bogus");

        let logger = registry.get_or_create_logger("svc", Some("nonsense".into()));
        logger.trace("still here").unwrap();
        assert_eq!(lines.get(), vec!["TRACE svc: still here".to_string()]);
    }

    #[test]
    fn test_replaced_appender_is_not_used() {
        let registry = Registry::new();
        let (first_lines, first_calls) = counting_appender(&registry, "out");
        let (second_lines, second_calls) = counting_appender(&registry, "out");

        registry.logger("svc").info("once").unwrap();
        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        assert!(first_lines.get().is_empty());
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_lines.get(), vec!["INFO svc: once".to_string()]);
    }

    #[test]
    fn test_no_appenders_is_fine() {
        let registry = Registry::new();
        assert!(registry.logger("lonely").error("nobody listens").is_ok());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_reaches_caller_after_other_appenders() {
        let registry = Registry::new();
        registry.add_appender(Appender::new("a-broken", Sink::writer(Broken)));
        let (lines, _) = counting_appender(&registry, "b-ok");

        let err = registry.logger("svc").warn("partial").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert_eq!(lines.get(), vec!["WARN svc: partial".to_string()]);
    }
}
