//! Logging macros with `format!`-style arguments.
//!
//! Each macro evaluates to the logger call's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use rust_named_logger::info;
//!
//! # fn main() -> Result<()> {
//! let registry = Registry::new();
//! let logger = registry.logger("server");
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port)?;
//! # Ok(())
//! # }
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Registry::new().logger("app");
/// use rust_named_logger::log;
/// log!(logger, LogLevel::Error, "error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
