//! Log entry structure

use super::enrichment::Enrichment;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::panic::Location;

/// One log event.
///
/// Serialized with the field names `Raised`, `Level`, `Source`, `Message`
/// and `Data`; every formatter that serializes the entry keeps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "Raised")]
    pub raised: DateTime<Local>,
    #[serde(rename = "Level")]
    pub level: LogLevel,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Data")]
    pub data: LogContext,
}

impl LogEntry {
    /// Create an entry raised now, with no source and an empty bag.
    pub fn new() -> Self {
        Self {
            raised: Local::now(),
            level: LogLevel::default(),
            source: String::new(),
            message: String::new(),
            data: LogContext::new(),
        }
    }

    /// Create an entry whose source is the caller's location.
    #[track_caller]
    pub fn here() -> Self {
        Self::new().with_source(format_location(Location::caller()))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replace the data bag, e.g. with a snapshot of logger constants.
    pub fn with_data(mut self, data: LogContext) -> Self {
        self.data = data;
        self
    }

    /// Merge one enrichment value into the data bag.
    pub fn enrich(&mut self, enrichment: impl Into<Enrichment>) {
        self.data.enrich(enrichment.into());
    }

    /// Set one key verbatim, overwriting any existing value.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.data.add_field(key, value);
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn format_location(location: &Location<'_>) -> String {
    format!("at {}:{}", location.file(), location.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = LogEntry::new();
        assert!(entry.source.is_empty());
        assert!(entry.message.is_empty());
        assert!(entry.data.is_empty());
        assert_eq!(entry.level, LogLevel::Info);

        let age = Local::now().signed_duration_since(entry.raised);
        assert!(age.num_seconds() <= 1);
    }

    #[test]
    fn test_here_records_caller() {
        let entry = LogEntry::here();
        assert!(entry.source.starts_with("at "));
        assert!(entry.source.contains("log_entry.rs:"));
    }

    #[test]
    fn test_enrich_and_value() {
        let mut entry = LogEntry::new();
        entry.enrich("value1");
        entry.enrich(None::<&str>);
        entry.set_value("key", "value");

        assert_eq!(entry.data.len(), 2);
        assert_eq!(entry.data.get("key"), Some(&FieldValue::from("value")));
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = LogEntry::new().with_source("at test.rs:1");
        let json = serde_json::to_value(&entry).unwrap();
        let object = json.as_object().unwrap();

        for field in ["Raised", "Level", "Source", "Message", "Data"] {
            assert!(object.contains_key(field), "missing {}", field);
        }
        assert_eq!(object.len(), 5);
    }
}
