//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The source of each
//! entry names the calling module as well as the file and line.
//!
//! # Examples
//!
//! ```
//! use entry_logger::prelude::*;
//! use entry_logger::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert!(sink.contents().contains("Server listening on port 8080"));
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use entry_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use entry_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger
            .entry_at(concat!("at ", module_path!(), " in ", file!(), ":", line!()))
            .log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use entry_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Debug).sink(MemorySink::new()).build();
/// use entry_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use entry_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use entry_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's exit hook.
///
/// ```
/// # use entry_logger::prelude::*;
/// # use std::sync::Arc;
/// # let logger = Logger::builder()
/// #     .sink(MemorySink::new())
/// #     .exit_hook(Arc::new(|_| {}))
/// #     .build();
/// use entry_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogEntry, LogLevel, Logger};
    use crate::formatters::JsonFormatter;
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn test_logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .min_level(LogLevel::Debug)
            .formatter(JsonFormatter::new())
            .sink(sink.clone())
            .exit_hook(Arc::new(|_| {}))
            .build();
        (logger, sink)
    }

    fn last_entry(sink: &MemorySink) -> LogEntry {
        let lines = sink.lines();
        serde_json::from_str(lines.last().unwrap()).unwrap()
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = test_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let entry = last_entry(&sink);
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "Formatted: 42");
    }

    #[test]
    fn test_macro_source_names_module() {
        let (logger, sink) = test_logger();
        info!(logger, "where");

        let source = last_entry(&sink).source;
        assert!(source.starts_with("at entry_logger::macros::tests in "), "{}", source);
        assert!(source.contains("macros.rs:"), "{}", source);
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = test_logger();

        debug!(logger, "Count: {}", 5);
        assert_eq!(last_entry(&sink).level, LogLevel::Debug);
        info!(logger, "Items: {}", 100);
        assert_eq!(last_entry(&sink).level, LogLevel::Info);
        warning!(logger, "Retry {} of {}", 1, 3);
        assert_eq!(last_entry(&sink).level, LogLevel::Warning);
        error!(logger, "Code: {}", 500);
        assert_eq!(last_entry(&sink).level, LogLevel::Error);
        fatal!(logger, "Critical failure: {}", "system");
        assert_eq!(last_entry(&sink).level, LogLevel::Fatal);

        assert_eq!(sink.lines().len(), 5);
    }

    #[test]
    fn test_fatal_macro_exits() {
        let (logger, _sink) = test_logger();
        let exited = Arc::new(AtomicBool::new(false));
        let exited_clone = Arc::clone(&exited);
        logger.set_exit_hook(Arc::new(move |_| exited_clone.store(true, Ordering::SeqCst)));

        fatal!(logger, "Fatal message");
        assert!(exited.load(Ordering::SeqCst));
    }
}
