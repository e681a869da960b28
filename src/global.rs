//! Process-wide default logger
//!
//! Free functions mirroring the [`Logger`] API, backed by a single lazily
//! created logger. Install a custom one with [`init`] before the first call
//! that touches the global, or adjust the default through the setters.
//!
//! ```
//! use entry_logger::global;
//! use entry_logger::LogLevel;
//!
//! global::set_level(LogLevel::Debug);
//! global::set_constant("code_name", "example");
//!
//! global::value("name", "john").debug("debug message");
//! global::with("john").info("info message");
//! ```

use crate::core::{
    EntryBuilder, Enrichment, ExitHook, FieldValue, Formatter, LogLevel, Logger, LoggerError,
    OutputFormat, Result, Sink,
};
use once_cell::sync::OnceCell;
use std::io::Write;

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Install `logger` as the global logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] once the global exists,
/// whether it came from an earlier `init` or was created on first use.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The global logger, created with [`Logger::new`] on first use
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

pub fn set_level(level: LogLevel) {
    global().set_min_level(level);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    global().set_formatter(formatter);
}

pub fn set_output_format(format: OutputFormat) {
    global().set_output_format(format);
}

pub fn set_sink<S: Sink + 'static>(sink: S) {
    global().set_sink(sink);
}

pub fn set_output<W: Write + Send + 'static>(writer: W) {
    global().set_output(writer);
}

pub fn set_constant(key: impl Into<String>, value: impl Into<FieldValue>) {
    global().set_constant(key, value);
}

pub fn remove_constant(key: &str) {
    global().remove_constant(key);
}

pub fn clear_constants() {
    global().clear_constants();
}

pub fn set_exit_hook(hook: ExitHook) {
    global().set_exit_hook(hook);
}

#[track_caller]
pub fn entry() -> EntryBuilder<'static> {
    global().entry()
}

#[track_caller]
pub fn with(data: impl Into<Enrichment>) -> EntryBuilder<'static> {
    global().with(data)
}

#[track_caller]
pub fn value(key: impl Into<String>, value: impl Into<FieldValue>) -> EntryBuilder<'static> {
    global().value(key, value)
}

#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>) {
    global().log(level, message);
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    global().debug(message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    global().info(message);
}

#[track_caller]
pub fn warning(message: impl Into<String>) {
    global().warning(message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    global().error(message);
}

/// Write a fatal entry through the global logger, then run its exit hook
#[track_caller]
pub fn fatal(message: impl Into<String>) {
    global().fatal(message);
}
