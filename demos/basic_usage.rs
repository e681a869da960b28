//! Basic logger usage example
//!
//! Builds entries at every level, enriches them with values, records and
//! errors, and switches formats along the way. The final fatal call exits
//! the process with status 1.
//!
//! Run with: cargo run --example basic_usage

use entry_logger::global;
use entry_logger::prelude::*;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct Data {
    name: String,
}

fn main() -> Result<()> {
    global::set_level(LogLevel::Debug);
    global::set_constant("code_name", "example");

    global::value("name", "john").debug("debug message");

    global::with("john").info("info message");

    global::with(Enrichment::record(&Data {
        name: "john".to_string(),
    }))
    .warning("warning message");

    global::set_output_format(OutputFormat::Json);
    global::with(Enrichment::error(&io::Error::new(
        io::ErrorKind::Other,
        "message",
    )))
    .error("error message");

    global::set_output_format(OutputFormat::Yaml);
    global::with(42).with(true).info("yaml message");

    let metrics = global::global().metrics();
    global::set_output_format(OutputFormat::Text);
    global::value("written", metrics.total_logged()).info("summary");

    global::fatal("fatal error");
    Ok(())
}
