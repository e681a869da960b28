//! # Entry Logger
//!
//! A structured, leveled logging library. Every log call builds an entry
//! (timestamp, level, source location, message and a key/value data bag),
//! filters it against a minimum level, renders it with a formatter and
//! writes one record to a sink.
//!
//! ## Features
//!
//! - **Enrichment**: attach errors, maps, serializable records and plain
//!   values to an entry before it is written
//! - **Constants**: key/value pairs copied into every new entry
//! - **Formatters**: human-readable text (optionally colored), JSON and YAML
//! - **Sinks**: stdout, stderr, files, any `std::io::Write`, and an
//!   in-memory sink for tests
//! - **Thread Safe**: a logger can be cloned and shared between threads;
//!   records never interleave
//!
//! ## Example
//!
//! ```
//! use entry_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .output_format(OutputFormat::Json)
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.set_constant("code_name", "example");
//! logger.value("name", "john").debug("debug message");
//! logger.with("john").info("info message");
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Enrichment, EntryBuilder, ExitHook, FieldValue, Formatter, LogContext, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat,
        OutputTarget, Result, Sink, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter, YamlFormatter};
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
}

pub use crate::core::{
    Enrichment, EntryBuilder, ExitHook, FieldValue, Formatter, LogContext, LogEntry, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerContext, LoggerError, LoggerMetrics, OutputFormat,
    OutputTarget, Result, Sink, TimestampFormat, ERROR_KEY, FATAL_EXIT_CODE, UNKNOWN_LEVEL,
    VALUES_KEY,
};
pub use crate::global::{global, init};
