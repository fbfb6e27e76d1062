//! Log level definitions and the level filter

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Terminal color used by the color formatter. `Trace` is left uncolored.
    pub fn color(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Trace => None,
            LogLevel::Debug => Some(Blue),
            LogLevel::Info => Some(Green),
            LogLevel::Warn => Some(Yellow),
            LogLevel::Error => Some(Red),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so that width specifiers like `{:5}` apply
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// A configured minimum level.
///
/// Level names come from callers and config files, so a threshold may carry a
/// name that does not resolve to any [`LogLevel`]. Such a threshold admits
/// every message: a misspelled level must never swallow diagnostics.
///
/// ```
/// use rust_named_logger::{LogLevel, Threshold};
///
/// assert_eq!(Threshold::from("warn"), Threshold::At(LogLevel::Warn));
/// assert!(Threshold::from("verbose").admits(LogLevel::Trace));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Threshold {
    At(LogLevel),
    Unrecognized(String),
}

impl Threshold {
    /// Parse a level name, keeping unknown names instead of rejecting them.
    pub fn parse(s: &str) -> Self {
        s.parse::<LogLevel>()
            .map(Threshold::At)
            .unwrap_or_else(|_| Threshold::Unrecognized(s.to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Threshold::At(_))
    }

    /// Whether a message at `level` clears this threshold.
    pub fn admits(&self, level: LogLevel) -> bool {
        match self {
            Threshold::At(min) => level >= *min,
            Threshold::Unrecognized(_) => true,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::At(LogLevel::Debug)
    }
}

impl From<LogLevel> for Threshold {
    fn from(level: LogLevel) -> Self {
        Threshold::At(level)
    }
}

impl From<&str> for Threshold {
    fn from(s: &str) -> Self {
        Threshold::parse(s)
    }
}

impl From<String> for Threshold {
    fn from(s: String) -> Self {
        Threshold::parse(&s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::At(level) => fmt::Display::fmt(level, f),
            Threshold::Unrecognized(name) => f.pad(name),
        }
    }
}

/// Decide whether a message at `level` passes a filter.
///
/// An unset `threshold` falls back to `root`.
pub fn loggable(level: LogLevel, threshold: Option<&Threshold>, root: &Threshold) -> bool {
    threshold.unwrap_or(root).admits(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("tRaCe".parse::<LogLevel>(), Ok(LogLevel::Trace));
    }

    #[test]
    fn test_only_exact_level_names_parse() {
        assert!("warning".parse::<LogLevel>().is_err());
        assert!(" info ".parse::<LogLevel>().is_err());
        assert!("fatal".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_near_miss_names_fail_open() {
        let warning = Threshold::from("warning");
        assert_eq!(warning, Threshold::Unrecognized("warning".to_string()));
        assert!(warning.admits(LogLevel::Trace));
        assert!(warning.admits(LogLevel::Info));

        let padded = Threshold::from(" info ");
        assert!(!padded.is_recognized());
        assert!(padded.admits(LogLevel::Debug));
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:5}", LogLevel::Warn), "WARN ");
        assert_eq!(format!("{:5}", LogLevel::Error), "ERROR");
    }

    #[test]
    fn test_threshold_parse_keeps_unknown_names() {
        assert_eq!(Threshold::from("DEBUG"), Threshold::At(LogLevel::Debug));
        assert_eq!(
            Threshold::from("loud"),
            Threshold::Unrecognized("loud".to_string())
        );
        assert!(!Threshold::from("loud").is_recognized());
    }

    #[test]
    fn test_loggable_against_explicit_threshold() {
        let root = Threshold::At(LogLevel::Error);
        let warn = Threshold::At(LogLevel::Warn);
        assert!(loggable(LogLevel::Warn, Some(&warn), &root));
        assert!(loggable(LogLevel::Error, Some(&warn), &root));
        assert!(!loggable(LogLevel::Info, Some(&warn), &root));
    }

    #[test]
    fn test_loggable_falls_back_to_root() {
        let root = Threshold::At(LogLevel::Info);
        assert!(!loggable(LogLevel::Debug, None, &root));

        let root = Threshold::At(LogLevel::Trace);
        assert!(loggable(LogLevel::Debug, None, &root));
    }

    #[test]
    fn test_unrecognized_threshold_fails_open() {
        let root = Threshold::At(LogLevel::Error);
        let bogus = Threshold::from("not-a-level");
        for level in LogLevel::ALL {
            assert!(loggable(level, Some(&bogus), &root));
        }

        let bogus_root = Threshold::from("???");
        for level in LogLevel::ALL {
            assert!(loggable(level, None, &bogus_root));
        }
    }

    #[test]
    fn test_trace_has_no_color() {
        assert!(LogLevel::Trace.color().is_none());
        assert_eq!(LogLevel::Error.color(), Some(colored::Color::Red));
    }
}
