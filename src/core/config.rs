//! Declarative logger configuration
//!
//! A [`LoggerConfig`] can be parsed from JSON or YAML and turned into a
//! [`LoggerBuilder`] with [`LoggerBuilder::from_config`]. Every field is
//! optional:
//!
//! ```yaml
//! level: debug
//! format: json
//! output: stderr
//! constants:
//!   service: api
//!   region: eu-west-1
//! ```

use super::error::Result;
use super::log_context::FieldValue;
use super::log_level::LogLevel;
use super::logger::LoggerBuilder;
use super::output_format::OutputFormat;
use crate::sinks::ConsoleSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where records go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file; needs the `file` feature
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: OutputFormat,
    pub output: OutputTarget,
    /// Force text colors on or off; unset follows terminal detection
    pub colors: Option<bool>,
    pub constants: BTreeMap<String, FieldValue>,
}

impl LoggerConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl LoggerBuilder {
    /// Start a builder from a parsed configuration.
    ///
    /// Fails only when the output target cannot be opened.
    ///
    /// # Example
    ///
    /// ```
    /// use entry_logger::{LogLevel, LoggerBuilder, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_yaml("level: warning\nformat: yaml\n").unwrap();
    /// let logger = LoggerBuilder::from_config(&config).unwrap().build();
    /// assert_eq!(logger.min_level(), LogLevel::Warning);
    /// ```
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut builder = LoggerBuilder::new()
            .min_level(config.level)
            .output_format(config.format);

        if let Some(colors) = config.colors {
            builder = builder.colors(colors);
        }

        builder = match &config.output {
            OutputTarget::Stdout => builder.sink(ConsoleSink::stdout()),
            OutputTarget::Stderr => builder.sink(ConsoleSink::stderr()),
            OutputTarget::File(path) => file_output(builder, path)?,
        };

        for (key, value) in &config.constants {
            builder = builder.constant(key.clone(), value.clone());
        }

        Ok(builder)
    }
}

#[cfg(feature = "file")]
fn file_output(builder: LoggerBuilder, path: &std::path::Path) -> Result<LoggerBuilder> {
    Ok(builder.sink(crate::sinks::FileSink::new(path)?))
}

#[cfg(not(feature = "file"))]
fn file_output(_builder: LoggerBuilder, path: &std::path::Path) -> Result<LoggerBuilder> {
    Err(super::error::LoggerError::config(
        "output",
        format!(
            "cannot log to '{}': built without the `file` feature",
            path.display()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_yaml_config() {
        let config = LoggerConfig::from_yaml(
            "level: debug\nformat: json\noutput: stderr\ncolors: false\nconstants:\n  service: api\n  port: 8080\n",
        )
        .unwrap();

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output, OutputTarget::Stderr);
        assert_eq!(config.colors, Some(false));
        assert_eq!(config.constants.get("port"), Some(&FieldValue::Int(8080)));
    }

    #[test]
    fn test_json_config_with_numeric_level() {
        let config = LoggerConfig::from_json(r#"{"level": 3, "format": "yaml"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_invalid_config() {
        let err = LoggerConfig::from_json(r#"{"format": "xml"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));

        let err = LoggerConfig::from_yaml("level: loud").unwrap_err();
        assert!(matches!(err, LoggerError::YamlError(_)));
    }

    #[test]
    fn test_builder_from_config() {
        let mut config = LoggerConfig {
            level: LogLevel::Warning,
            format: OutputFormat::Json,
            output: OutputTarget::Stderr,
            ..LoggerConfig::default()
        };
        config
            .constants
            .insert("service".to_string(), FieldValue::from("api"));

        let logger = LoggerBuilder::from_config(&config).unwrap().build();
        assert_eq!(logger.min_level(), LogLevel::Warning);
        assert_eq!(logger.formatter_name(), "json");
        assert_eq!(logger.sink_name(), "stderr");
        assert_eq!(logger.constants().get("service"), Some(FieldValue::from("api")));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_builder_from_config_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = LoggerConfig {
            format: OutputFormat::Json,
            output: OutputTarget::File(path.clone()),
            ..LoggerConfig::default()
        };

        let logger = LoggerBuilder::from_config(&config).unwrap().build();
        logger.info("to file");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Message\":\"to file\""));
        assert!(content.ends_with('\n'));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_builder_from_config_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig {
            output: OutputTarget::File(dir.path().join("missing").join("app.log")),
            ..LoggerConfig::default()
        };

        assert!(LoggerBuilder::from_config(&config).is_err());
    }
}
