//! JSON formatter for machine processing

use crate::core::{Formatter, LogEntry, Result};

/// Renders the whole entry as a JSON object
///
/// Example: `{"Raised":"2025-01-08T10:30:45.123+01:00","Level":1,"Source":"at src/main.rs:12","Message":"Request processed","Data":{"user_id":42}}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Multi-line, indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(entry)?
        } else {
            serde_json::to_string(entry)?
        };
        Ok(json)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    fn test_entry() -> LogEntry {
        let mut entry = LogEntry::new()
            .with_source("at test.rs:10")
            .with_data(LogContext::new().with_field("k", "v"));
        entry.level = LogLevel::Info;
        entry.message = "hello".to_string();
        entry
    }

    #[test]
    fn test_json_format() {
        let result = JsonFormatter::new().format(&test_entry()).unwrap();
        assert!(!result.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["Message"], "hello");
        assert_eq!(parsed["Level"], 1);
        assert_eq!(parsed["Source"], "at test.rs:10");
        assert_eq!(parsed["Data"], serde_json::json!({"k": "v"}));
        assert!(parsed["Raised"].is_string());
    }

    #[test]
    fn test_json_matches_serde() {
        let entry = test_entry();
        let result = JsonFormatter::new().format(&entry).unwrap();
        assert_eq!(result, serde_json::to_string(&entry).unwrap());
    }

    #[test]
    fn test_json_roundtrip_preserves_entry() {
        let entry = test_entry();
        let result = JsonFormatter::new().format(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_pretty_json() {
        let result = JsonFormatter::pretty().format(&test_entry()).unwrap();
        assert!(result.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["Message"], "hello");
    }
}
