//! Formatter implementations

pub mod json;
pub mod text;
pub mod yaml;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use yaml::YamlFormatter;

pub use crate::core::Formatter;
