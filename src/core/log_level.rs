//! Log level definitions

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry.
///
/// Levels are totally ordered: `Debug < Info < Warning < Error < Fatal`.
/// An entry is written only when its level is at or above the logger's
/// minimum level. Serialized as the underlying integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

/// Display name returned for integers outside the level range.
pub const UNKNOWN_LEVEL: &str = "Unknown";

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// Display name for a raw level integer, `"Unknown"` when out of range.
    ///
    /// ```
    /// use entry_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::name_of(2), "Warning");
    /// assert_eq!(LogLevel::name_of(10), "Unknown");
    /// assert_eq!(LogLevel::name_of(-1), "Unknown");
    /// ```
    pub fn name_of(raw: i64) -> &'static str {
        u8::try_from(raw)
            .ok()
            .and_then(Self::from_u8)
            .map_or(UNKNOWN_LEVEL, |level| level.to_str())
    }

    #[cfg(feature = "console")]
    pub fn colorize(&self, text: &str) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            LogLevel::Fatal => text.red().bold(),
            LogLevel::Error => text.red(),
            LogLevel::Warning => text.yellow(),
            LogLevel::Info => text.cyan(),
            LogLevel::Debug => text.white(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, String> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_u8)
            .ok_or_else(|| format!("Invalid log level: {}", value))
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

struct LogLevelVisitor;

impl<'de> Visitor<'de> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level integer between 0 and 4 or a level name")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
        LogLevel::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
        let v = i64::try_from(v).map_err(E::custom)?;
        self.visit_i64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}
