//! Human-readable text formatter

use crate::core::{Formatter, LogEntry, LogLevel, LoggerError, Result, TimestampFormat};

/// Renders an entry as a short header line followed by the source and,
/// when present, an indented YAML dump of the data bag:
///
/// ```text
/// 2025-01-08 10:30:45.123+01:00 | INFO | Request processed
/// 	at src/main.rs:12
/// 	user_id: 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatter {
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this formatter
    ///
    /// # Examples
    ///
    /// ```
    /// use entry_logger::formatters::TextFormatter;
    /// use entry_logger::TimestampFormat;
    ///
    /// let formatter = TextFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    fn format_level(&self, level: LogLevel) -> String {
        let name = level.to_str().to_uppercase();
        #[cfg(feature = "console")]
        if self.use_colors {
            return level.colorize(&name).to_string();
        }
        name
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &LogEntry) -> Result<String> {
        let mut output = format!(
            "{} | {} | {} \n\t{}",
            self.timestamp_format.format(&entry.raised),
            self.format_level(entry.level),
            entry.message.trim(),
            entry.source
        );

        if !entry.data.is_empty() {
            let dump = serde_yaml::to_string(&entry.data)
                .map_err(|e| LoggerError::formatter("text", e.to_string()))?;
            output.push_str("\n\t");
            output.push_str(&dump.trim().replace('\n', "\n\t"));
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogContext;

    fn test_entry(level: LogLevel, data: LogContext) -> LogEntry {
        let mut entry = LogEntry::new()
            .with_source("at test in test.rs:10")
            .with_data(data);
        entry.level = level;
        entry.message = "  text message \n".to_string();
        entry
    }

    #[test]
    fn test_text_format_all_levels() {
        let formatter = TextFormatter::with_colors(false);
        let data = LogContext::new()
            .with_field("error", "can not do job")
            .with_field("key", "value");

        for level in LogLevel::ALL {
            let entry = test_entry(level, data.clone());
            let text = formatter.format(&entry).unwrap();

            assert!(text.contains(&level.to_str().to_uppercase()));
            assert!(text.contains("at test in test.rs:10"));
            assert!(text.contains("| text message \n\t"));
            assert!(text.contains(&entry.raised.format("%Y-%m-%d %H:%M:%S").to_string()));
            assert!(text.contains("\n\terror: can not do job\n\tkey: value"));
        }
    }

    #[test]
    fn test_text_format_layout() {
        let formatter = TextFormatter::with_colors(false);
        let entry = test_entry(LogLevel::Warning, LogContext::new().with_field("k", "v"));
        let text = formatter.format(&entry).unwrap();

        let expected = format!(
            "{} | WARNING | text message \n\tat test in test.rs:10\n\tk: v",
            TimestampFormat::Text.format(&entry.raised)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_format_empty_data_has_no_dump() {
        let formatter = TextFormatter::with_colors(false);
        let entry = test_entry(LogLevel::Info, LogContext::new());
        let text = formatter.format(&entry).unwrap();

        assert!(text.ends_with("\n\tat test in test.rs:10"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_text_format_nested_data_is_indented() {
        let formatter = TextFormatter::with_colors(false);
        let data = LogContext::new().with_field("values", vec!["a", "b"]);
        let text = formatter.format(&test_entry(LogLevel::Info, data)).unwrap();

        assert!(text.contains("\n\tvalues:\n\t- a\n\t- b"));
    }

    #[test]
    fn test_text_format_without_colors_has_no_escapes() {
        let formatter = TextFormatter::with_colors(false);
        let text = formatter
            .format(&test_entry(LogLevel::Fatal, LogContext::new()))
            .unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("| FATAL |"));
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_text_format_colors_level_by_severity() {
        colored::control::set_override(true);
        let formatter = TextFormatter::with_colors(true);
        assert!(formatter.uses_colors());

        let expected = [
            (LogLevel::Debug, "\u{1b}[37mDEBUG\u{1b}[0m"),
            (LogLevel::Info, "\u{1b}[36mINFO\u{1b}[0m"),
            (LogLevel::Warning, "\u{1b}[33mWARNING\u{1b}[0m"),
            (LogLevel::Error, "\u{1b}[31mERROR\u{1b}[0m"),
            (LogLevel::Fatal, "\u{1b}[1;31mFATAL\u{1b}[0m"),
        ];

        for (level, colored_name) in expected {
            let entry = test_entry(level, LogContext::new().with_field("k", "v"));
            let text = formatter.format(&entry).unwrap();
            let header = text.lines().next().unwrap();
            let parts: Vec<&str> = header.split(" | ").collect();

            assert_eq!(parts.len(), 3, "{:?}", header);
            assert_eq!(parts[0], TimestampFormat::Text.format(&entry.raised));
            assert_eq!(parts[1], colored_name);
            assert_eq!(parts[2], "text message ");
            assert!(!text.lines().skip(1).any(|line| line.contains('\u{1b}')));
        }
    }

    #[test]
    fn test_custom_timestamp() {
        let formatter = TextFormatter::with_colors(false).with_custom_timestamp("%Y");
        let entry = test_entry(LogLevel::Info, LogContext::new());
        let text = formatter.format(&entry).unwrap();
        assert!(text.starts_with(&format!("{} | INFO |", entry.raised.format("%Y"))));
    }
}
