//! Output format handling for parcelbook
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for scripts and context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Output format for parcelbook commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(CatalogError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape a value for a quoted records field.
///
/// Quotes are backslash-escaped and line breaks become `\n` so every
/// record stays on one line.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace("\r\n", r"\n")
        .replace('\n', r"\n")
}

/// A header value in quotes, escaped like any other quoted field
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

/// `H parcelbook=1 records=1 mode=<mode> k=v...`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H parcelbook=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
