//! Console sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::io::{IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes each line to standard output or standard error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    fn write_to(out: &mut impl Write, line: &str) -> std::io::Result<()> {
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        out.write_all(record.as_bytes())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let result = match self.stream {
            Stream::Stdout => Self::write_to(&mut std::io::stdout().lock(), line),
            Stream::Stderr => Self::write_to(&mut std::io::stderr().lock(), line),
        };
        result.map_err(|e| LoggerError::io_operation("writing to console", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }

    /// `colored` only emits escapes when stdout is a terminal, so stderr
    /// counts as one only when both streams are.
    fn is_terminal(&self) -> bool {
        let stdout = std::io::stdout().is_terminal();
        match self.stream {
            Stream::Stdout => stdout,
            Stream::Stderr => stdout && std::io::stderr().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_names() {
        assert_eq!(ConsoleSink::stdout().name(), "stdout");
        assert_eq!(ConsoleSink::stderr().name(), "stderr");
        assert_eq!(ConsoleSink::default(), ConsoleSink::stdout());
    }

    #[test]
    fn test_stderr_terminal_requires_stdout_terminal() {
        let stdout = std::io::stdout().is_terminal();
        let stderr = std::io::stderr().is_terminal();

        assert_eq!(ConsoleSink::stdout().is_terminal(), stdout);
        assert_eq!(ConsoleSink::stderr().is_terminal(), stdout && stderr);
    }

    #[test]
    fn test_console_write() {
        let mut sink = ConsoleSink::stderr();
        assert!(sink.write_line("console sink test line").is_ok());
        assert!(sink.flush().is_ok());
    }
}
