//! Core logger types and traits

pub mod config;
pub mod enrichment;
pub mod entry_builder;
pub mod error;
pub mod formatter;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod sink;
pub mod timestamp;

pub use config::{LoggerConfig, OutputTarget};
pub use enrichment::Enrichment;
pub use entry_builder::EntryBuilder;
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_context::{FieldValue, LogContext, LoggerContext, ERROR_KEY, VALUES_KEY};
pub use log_entry::LogEntry;
pub use log_level::{LogLevel, UNKNOWN_LEVEL};
pub use logger::{ExitHook, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
