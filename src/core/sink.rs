//! Sink trait for log output destinations

use super::error::Result;

/// Destination for rendered log lines.
///
/// `write_line` receives the formatter output without a terminator and must
/// write it followed by `\n` in one call.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether the destination is an interactive terminal. Decides if the
    /// text formatter colors level names by default.
    fn is_terminal(&self) -> bool {
        false
    }
}
