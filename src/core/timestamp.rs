//! Timestamp rendering for the plain and color formatters

use chrono::{DateTime, Local, Utc};

/// How the leading timestamp of a formatted line is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Wall-clock time in the local zone: `2025-01-08 11:30:45,123`
    Local,

    /// Seconds since the epoch
    Unix,

    /// Milliseconds since the epoch
    UnixMillis,

    /// Any strftime-compatible pattern, rendered in UTC
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Local => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S,%3f")
                .to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => datetime.format(pattern).to_string(),
        }
    }

    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
