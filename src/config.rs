//! Declarative logging configuration
//!
//! A JSON document describes logger levels and appenders:
//!
//! ```json
//! {
//!   "loggers": { "root": "info", "db": "warn" },
//!   "appenders": [
//!     { "name": "console", "type": "console", "formatter": "color", "fd": 2 },
//!     { "name": "audit", "type": "file", "file": "logs/audit.log", "level": "error" }
//!   ]
//! }
//! ```
//!
//! The logger named `root` sets the registry's root level instead of creating
//! a logger. Relative `file` paths are resolved against the directory that
//! holds the config file.

use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
use crate::core::{Appender, FormatterKind, LoggerError, Registry, Result, Threshold};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reserved logger name that addresses the root level.
pub const ROOT_LOGGER: &str = "root";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logger name to level name
    pub loggers: BTreeMap<String, String>,

    pub appenders: Vec<AppenderConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderType {
    Console,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppenderConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AppenderType,

    #[serde(default)]
    pub level: Option<String>,

    /// `plain` (default) or `color`
    #[serde(default)]
    pub formatter: Option<String>,

    /// Target path, file appenders only
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub truncate: bool,

    /// 1 for stdout (default), 2 for stderr; console appenders only
    #[serde(default)]
    pub fd: Option<u8>,
}

impl LoggingConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                format!("reading config '{}'", path.display()),
                e.to_string(),
                e,
            )
        })?;
        content.parse()
    }

    /// Populate `registry`. Every descriptor is validated before any file is
    /// opened, and every appender is built before anything is registered, so
    /// a bad descriptor leaves both the registry and the filesystem untouched.
    /// An open failure on a later file can still leave earlier files created.
    pub fn apply(&self, registry: &Registry, base_dir: &Path) -> Result<()> {
        for descriptor in &self.appenders {
            descriptor.validate()?;
        }

        let appenders = self
            .appenders
            .iter()
            .map(|descriptor| descriptor.build(base_dir))
            .collect::<Result<Vec<_>>>()?;

        for (name, level) in &self.loggers {
            let threshold = checked_threshold(&format!("logger '{}'", name), level);
            if name == ROOT_LOGGER {
                registry.set_root_level(threshold);
            } else {
                registry.get_or_create_logger(name, Some(threshold));
            }
        }

        for appender in appenders {
            registry.add_appender(appender);
        }
        Ok(())
    }
}

impl FromStr for LoggingConfig {
    type Err = LoggerError;

    fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl AppenderConfig {
    /// Check the descriptor without touching any sink.
    pub fn validate(&self) -> Result<()> {
        self.formatter_kind()?;
        match self.kind {
            AppenderType::Console => self.console_target().map(|_| ()),
            AppenderType::File => self.file_path().map(|_| ()),
        }
    }

    /// Construct the appender this descriptor names.
    pub fn build(&self, base_dir: &Path) -> Result<Appender> {
        let formatter = self.formatter_kind()?.build();
        let level = self
            .level
            .as_ref()
            .map(|level| checked_threshold(&self.component(), level));

        match self.kind {
            AppenderType::Console => {
                let mut builder = ConsoleAppender::builder(&self.name)
                    .target(self.console_target()?)
                    .formatter(formatter);
                if let Some(level) = level {
                    builder = builder.level(level);
                }
                Ok(builder.build())
            }
            AppenderType::File => {
                let mut builder =
                    FileAppender::builder(&self.name, resolve(base_dir, self.file_path()?))
                        .truncate(self.truncate)
                        .formatter(formatter);
                if let Some(level) = level {
                    builder = builder.level(level);
                }
                builder.build()
            }
        }
    }

    fn component(&self) -> String {
        format!("appender '{}'", self.name)
    }

    fn formatter_kind(&self) -> Result<FormatterKind> {
        match &self.formatter {
            Some(name) => name
                .parse::<FormatterKind>()
                .map_err(|msg| LoggerError::config(self.component(), msg)),
            None => Ok(FormatterKind::default()),
        }
    }

    fn console_target(&self) -> Result<ConsoleTarget> {
        match self.fd {
            None | Some(1) => Ok(ConsoleTarget::Stdout),
            Some(2) => Ok(ConsoleTarget::Stderr),
            Some(other) => Err(LoggerError::config(
                self.component(),
                format!("fd must be 1 or 2, got {}", other),
            )),
        }
    }

    fn file_path(&self) -> Result<&Path> {
        self.file
            .as_deref()
            .ok_or_else(|| LoggerError::config(self.component(), "missing 'file'"))
    }
}

/// Read `path` and apply it to `registry`.
pub fn load_config(registry: &Registry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let config = LoggingConfig::from_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    config.apply(registry, base_dir)
}

fn resolve(base_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base_dir.join(file)
    }
}

fn checked_threshold(owner: &str, level: &str) -> Threshold {
    let threshold = Threshold::parse(level);
    if !threshold.is_recognized() {
        eprintln!(
            "[LOGGER WARNING] Unrecognized level '{}' for {}; its messages will not be filtered",
            level, owner
        );
    }
    threshold
}
