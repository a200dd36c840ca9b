//! Report rendering for parsed cost ranges
//!
//! Diagnostic output for a canonical-key-indexed cost map, in one of two
//! formats: a plain `key value` line per entry, or a JSON array of entries.
//! Entries render in key order, which is numeric order.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::cost::key::CanonicalKey;

/// Output format for a rendered range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

impl OutputFormat {
    /// Parse a format name like "simple" or "json".
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError::UnknownFormat(name.to_string())),
        }
    }
}

/// Error type for range rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown output format: {}", name),
            FormatError::Serialization(msg) => write!(f, "Failed to serialize range: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Serialize)]
struct RangeEntry<'a> {
    key: &'a CanonicalKey,
    value: &'a str,
}

/// Render a parsed range in the requested format.
pub fn render_range(
    entries: &BTreeMap<CanonicalKey, String>,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Simple => Ok(entries
            .iter()
            .map(|(key, value)| format!("{} {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<RangeEntry<'_>> = entries
                .iter()
                .map(|(key, value)| RangeEntry { key, value })
                .collect();
            serde_json::to_string(&entries)
                .map_err(|e| FormatError::Serialization(e.to_string()))
        }
    }
}
