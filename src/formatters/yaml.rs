//! YAML formatter

use crate::core::{Formatter, LogEntry, Result};

/// Renders the entry as a block-style YAML document with the same field
/// names as [`JsonFormatter`](super::JsonFormatter).
///
/// The trailing line break is trimmed; the sink adds one per record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for YamlFormatter {
    fn format(&self, entry: &LogEntry) -> Result<String> {
        let yaml = serde_yaml::to_string(entry)?;
        Ok(yaml.trim_end().to_string())
    }

    fn name(&self) -> &str {
        "yaml"
    }
}
