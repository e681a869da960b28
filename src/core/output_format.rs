//! Output format selection
//!
//! Names the three built-in formatters so they can be picked from
//! configuration:
//! - Text: human-readable block (default)
//! - Json: one JSON object per record
//! - Yaml: one YAML document per record

use super::formatter::Formatter;
use crate::formatters::{JsonFormatter, TextFormatter, YamlFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `2025-01-08 10:30:45.123+01:00 | INFO | Request processed`
    #[default]
    Text,

    /// Example: `{"Raised":"2025-01-08T10:30:45.123+01:00","Level":1,"Source":"","Message":"Request processed","Data":{}}`
    Json,

    /// Block-style YAML with the same field names as JSON
    Yaml,
}

impl OutputFormat {
    /// Build the formatter for this format.
    ///
    /// `colors` only affects [`OutputFormat::Text`].
    pub fn formatter(&self, colors: bool) -> Arc<dyn Formatter> {
        match self {
            OutputFormat::Text => Arc::new(TextFormatter::with_colors(colors)),
            OutputFormat::Json => Arc::new(JsonFormatter::new()),
            OutputFormat::Yaml => Arc::new(YamlFormatter::new()),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}
