//! Main logger implementation

use super::{
    entry_builder::EntryBuilder,
    enrichment::Enrichment,
    error::Result,
    formatter::Formatter,
    log_context::{FieldValue, LoggerContext},
    log_entry::{format_location, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    sink::Sink,
};
use crate::sinks::{ConsoleSink, WriterSink};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{AssertUnwindSafe, Location};
use std::sync::Arc;

/// Status passed to the exit hook after a fatal entry is written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback run after a fatal entry is written
///
/// The default terminates the process with [`FATAL_EXIT_CODE`]. Tests swap
/// it for a hook that records the call instead.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

fn process_exit_hook() -> ExitHook {
    Arc::new(|code: i32| {
        std::process::exit(code);
    })
}

/// How the active formatter was picked, so a sink change can re-decide
/// colors for a built-in text formatter.
#[derive(Debug, Clone, Copy)]
struct FormatterChoice {
    /// `None` once a custom formatter is installed
    format: Option<OutputFormat>,
    /// `None` follows `Sink::is_terminal`
    colors: Option<bool>,
}

/// A logging facility: minimum level, formatter, sink, constants and exit
/// hook, each behind its own lock.
///
/// Clones share all of that state, so a clone handed to another thread sees
/// every setter call made through any other handle.
///
/// # Example
///
/// ```
/// use entry_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warning)
///     .output_format(OutputFormat::Json)
///     .sink(sink.clone())
///     .build();
///
/// logger.debug("x");
/// logger.error("y");
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("\"Message\":\"y\""));
/// ```
#[derive(Clone)]
pub struct Logger {
    min_level: Arc<RwLock<LogLevel>>,
    formatter: Arc<RwLock<Arc<dyn Formatter>>>,
    formatter_choice: Arc<RwLock<FormatterChoice>>,
    sink: Arc<Mutex<Box<dyn Sink>>>,
    constants: LoggerContext,
    exit_hook: Arc<RwLock<ExitHook>>,
    /// Metrics for observability (written, dropped and filtered counts)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger at `Info` writing text to stdout, colored when stdout is a
    /// terminal.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    // Lock order: formatter_choice, then sink, then formatter.

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        let mut choice = self.formatter_choice.write();
        choice.format = None;
        *self.formatter.write() = Arc::new(formatter);
    }

    /// Switch to one of the built-in formatters. Unless colors were forced
    /// on the builder, text output is colored when the current sink is a
    /// terminal.
    pub fn set_output_format(&self, format: OutputFormat) {
        let mut choice = self.formatter_choice.write();
        choice.format = Some(format);
        let colors = choice
            .colors
            .unwrap_or_else(|| self.sink.lock().is_terminal());
        *self.formatter.write() = format.formatter(colors);
    }

    pub fn formatter_name(&self) -> String {
        self.formatter.read().name().to_string()
    }

    /// Replace the sink. A built-in formatter with automatic colors is
    /// rebuilt for the new sink; custom formatters are kept as they are.
    pub fn set_sink<S: Sink + 'static>(&self, sink: S) {
        let choice = self.formatter_choice.read();
        let mut current = self.sink.lock();
        *current = Box::new(sink);

        if let (Some(format), None) = (choice.format, choice.colors) {
            *self.formatter.write() = format.formatter(current.is_terminal());
        }
    }

    /// Write to any `std::io::Write`
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.set_sink(WriterSink::new(writer));
    }

    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// Set a constant copied into every entry built from now on.
    ///
    /// Entries that already exist are not affected.
    pub fn set_constant<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.constants.set(key, value);
    }

    pub fn remove_constant(&self, key: &str) {
        self.constants.remove(key);
    }

    pub fn clear_constants(&self) {
        self.constants.clear();
    }

    pub fn constants(&self) -> &LoggerContext {
        &self.constants
    }

    pub fn set_exit_hook(&self, hook: ExitHook) {
        *self.exit_hook.write() = hook;
    }

    /// Get the logger metrics
    ///
    /// ```
    /// use entry_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// let metrics = logger.metrics();
    /// println!("Written: {}", metrics.total_logged());
    /// println!("Dropped: {}", metrics.dropped_count());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Entries lost to formatter or sink failures
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Start an entry: raised now, sourced at the caller, seeded with the
    /// current constants.
    #[track_caller]
    pub fn entry(&self) -> EntryBuilder<'_> {
        self.entry_at(format_location(Location::caller()))
    }

    /// Start an entry with an explicit source string
    pub fn entry_at(&self, source: impl Into<String>) -> EntryBuilder<'_> {
        let entry = LogEntry::new()
            .with_source(source)
            .with_data(self.constants.to_log_context());
        EntryBuilder::new(self, entry)
    }

    #[track_caller]
    pub fn with(&self, data: impl Into<Enrichment>) -> EntryBuilder<'_> {
        self.entry().with(data)
    }

    #[track_caller]
    pub fn value(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> EntryBuilder<'_> {
        self.entry().value(key, value)
    }

    /// Write `message` at `level`. A fatal entry also runs the exit hook.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.entry().log(level, message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Write a fatal entry, then run the exit hook with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Filter, render and write a finished entry.
    ///
    /// Never fails: formatter and sink errors are reported on stderr and
    /// counted as dropped.
    pub fn emit(&self, entry: &LogEntry) {
        if !self.is_enabled(entry.level) {
            self.metrics.record_filtered();
            return;
        }

        let formatter = Arc::clone(&*self.formatter.read());
        let Some(line) = Self::render_isolated(formatter.as_ref(), entry) else {
            self.metrics.record_dropped();
            return;
        };

        let mut sink = self.sink.lock();
        if Self::write_isolated(sink.as_mut(), &line) {
            self.metrics.record_logged();
        } else {
            self.metrics.record_dropped();
        }
    }

    /// Render one entry with panic isolation, so a misbehaving formatter
    /// cannot unwind into the caller.
    fn render_isolated(formatter: &dyn Formatter, entry: &LogEntry) -> Option<String> {
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| formatter.format(entry)));

        match result {
            Ok(Ok(line)) => Some(line),
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Formatter '{}' failed: {}",
                    formatter.name(),
                    e
                );
                None
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Formatter '{}' panicked: {}",
                    formatter.name(),
                    panic_message(panic_info.as_ref())
                );
                None
            }
        }
    }

    /// Write one line with panic isolation, so a misbehaving sink cannot
    /// unwind into the caller.
    fn write_isolated(sink: &mut dyn Sink, line: &str) -> bool {
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(line)));

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                false
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_message(panic_info.as_ref())
                );
                false
            }
        }
    }

    /// Run the exit hook. The lock is released first since the default hook
    /// never returns.
    pub(crate) fn terminate(&self) {
        let hook = Arc::clone(&*self.exit_hook.read());
        hook(FATAL_EXIT_CODE);
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("formatter", &self.formatter_name())
            .field("sink", &self.sink_name())
            .field("constants", &self.constants.len())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use entry_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .output_format(OutputFormat::Yaml)
///     .sink(ConsoleSink::stderr())
///     .constant("service", "api")
///     .exit_hook(Arc::new(|code| eprintln!("would exit with {}", code)))
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    output_format: OutputFormat,
    colors: Option<bool>,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Option<Box<dyn Sink>>,
    constants: Vec<(String, FieldValue)>,
    exit_hook: Option<ExitHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            output_format: OutputFormat::Text,
            colors: None,
            formatter: None,
            sink: None,
            constants: Vec::new(),
            exit_hook: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Use one of the built-in formatters
    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Force text colors on or off instead of following the sink
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Use a custom formatter; takes precedence over `output_format`
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.sink(WriterSink::new(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn constant(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.constants.push((key.into(), value.into()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = Some(hook);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::stdout()));

        let choice = FormatterChoice {
            format: self.formatter.is_none().then_some(self.output_format),
            colors: self.colors,
        };
        let formatter = self.formatter.unwrap_or_else(|| {
            self.output_format
                .formatter(choice.colors.unwrap_or_else(|| sink.is_terminal()))
        });

        let constants = LoggerContext::new();
        for (key, value) in self.constants {
            constants.set(key, value);
        }

        Logger {
            min_level: Arc::new(RwLock::new(self.min_level)),
            formatter: Arc::new(RwLock::new(formatter)),
            formatter_choice: Arc::new(RwLock::new(choice)),
            sink: Arc::new(Mutex::new(sink)),
            constants,
            exit_hook: Arc::new(RwLock::new(
                self.exit_hook.unwrap_or_else(process_exit_hook),
            )),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
