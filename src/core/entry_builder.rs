//! Fluent construction of a single log entry
//!
//! An [`EntryBuilder`] is created by [`Logger::entry`], [`Logger::with`] or
//! [`Logger::value`], enriched any number of times and consumed by one of
//! the level methods.

use super::enrichment::Enrichment;
use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::logger::Logger;

/// Builder for one log entry bound to the logger that will emit it
///
/// # Example
///
/// ```
/// use entry_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .output_format(OutputFormat::Json)
///     .sink(sink.clone())
///     .build();
///
/// logger
///     .value("name", "john")
///     .with("first")
///     .with(42)
///     .info("request handled");
///
/// let line = sink.lines().remove(0);
/// assert!(line.contains("\"name\":\"john\""));
/// assert!(line.contains("\"values\":[\"first\",42]"));
/// ```
#[must_use = "an entry is only written by a level method such as `info`"]
pub struct EntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> EntryBuilder<'a> {
    pub(crate) fn new(logger: &'a Logger, entry: LogEntry) -> Self {
        Self { logger, entry }
    }

    /// Merge a value into the data bag following the enrichment rules
    pub fn with(mut self, data: impl Into<Enrichment>) -> Self {
        self.entry.enrich(data);
        self
    }

    /// Set one key verbatim, overwriting any previous value
    pub fn value(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.entry.set_value(key, value);
        self
    }

    /// The entry as built so far
    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }

    /// Stop building without emitting
    pub fn into_entry(self) -> LogEntry {
        self.entry
    }

    /// Set level and message, then emit. A fatal entry runs the logger's
    /// exit hook afterwards, whether or not the write succeeded.
    pub fn log(mut self, level: LogLevel, message: impl Into<String>) {
        self.entry.level = level;
        self.entry.message = message.into();
        self.logger.emit(&self.entry);

        if level == LogLevel::Fatal {
            self.logger.terminate();
        }
    }

    pub fn debug(self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Emit at `Fatal` and run the exit hook
    pub fn fatal(self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}
