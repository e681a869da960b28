//! Timestamp formatting utilities
//!
//! Provides the timestamp formats available to the text formatter.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use entry_logger::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Text;
/// let timestamp = format.format(&Local::now());
/// // Output: "2025-01-08 10:30:45.123+01:00"
/// assert_eq!(timestamp.len(), 29);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with milliseconds and offset: `2025-01-08 10:30:45.123+01:00`
    ///
    /// Default for the text formatter.
    #[default]
    Text,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T09:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the entry's own offset: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use entry_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    pub const TEXT_PATTERN: &'static str = "%Y-%m-%d %H:%M:%S%.3f%:z";

    /// Format a timestamp according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Text => datetime.format(Self::TEXT_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime
                .naive_utc()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
