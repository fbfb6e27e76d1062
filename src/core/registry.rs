//! The logger/appender registry
//!
//! A [`Registry`] is the context every logger and appender lookup goes
//! through. It is an ordinary value owned by the application (clone it to
//! share it), so tests can build a fresh one instead of fighting over global
//! state.
//!
//! # Concurrency
//!
//! All operations take `&self` and the registry is `Send + Sync`. Register
//! loggers and appenders during start-up, then log from as many threads as
//! needed. A `log` call works on a snapshot of the appender table taken when
//! it starts, so an appender added while another thread is mid-call may or
//! may not see that message.

use super::{appender::Appender, log_level::Threshold, logger::Logger};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// State shared between the registry and every logger it hands out.
#[derive(Debug, Default)]
pub(crate) struct Dispatch {
    root_level: RwLock<Threshold>,
    appenders: RwLock<BTreeMap<String, Arc<Appender>>>,
}

impl Dispatch {
    pub(crate) fn root_level(&self) -> Threshold {
        self.root_level.read().clone()
    }

    pub(crate) fn appenders(&self) -> Vec<Arc<Appender>> {
        self.appenders.read().values().cloned().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    loggers: Arc<RwLock<HashMap<String, Arc<Logger>>>>,
    dispatch: Arc<Dispatch>,
}

impl Registry {
    /// An empty registry with the root level at `Debug`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a logger, creating it on first use.
    ///
    /// `level` only matters when the logger does not exist yet. Asking for an
    /// existing name with a different level returns the existing logger
    /// untouched.
    pub fn get_or_create_logger(&self, name: &str, level: Option<Threshold>) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(name, level, Arc::clone(&self.dispatch)))
        });
        Arc::clone(logger)
    }

    /// Shorthand for `get_or_create_logger(name, None)`.
    pub fn logger(&self, name: &str) -> Arc<Logger> {
        self.get_or_create_logger(name, None)
    }

    pub fn has_logger(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn set_root_level(&self, level: impl Into<Threshold>) {
        *self.dispatch.root_level.write() = level.into();
    }

    pub fn root_level(&self) -> Threshold {
        self.dispatch.root_level()
    }

    /// Register an appender, replacing any appender with the same name.
    pub fn add_appender(&self, appender: Appender) -> Arc<Appender> {
        let appender = Arc::new(appender);
        self.dispatch
            .appenders
            .write()
            .insert(appender.name().to_string(), Arc::clone(&appender));
        appender
    }

    pub fn get_appender(&self, name: &str) -> Option<Arc<Appender>> {
        self.dispatch.appenders.read().get(name).cloned()
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.dispatch.appenders.read().keys().cloned().collect()
    }
}
