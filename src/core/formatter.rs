//! Formatter trait for rendering log entries

use super::{error::Result, log_entry::LogEntry};

/// Renders one entry to text.
///
/// Formatters hold no per-entry state: the same entry always renders to the
/// same string, so swapping the active formatter never affects entries that
/// were already written.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Result<String>;
    fn name(&self) -> &str;
}
