//! Usage catalog: decoding digit codes found in `recommended_usage`

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CatalogError, Result};

const BUILTIN_CATALOG: &str = include_str!("usage_catalog.toml");

static CODE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn code_pattern() -> Option<&'static Regex> {
    CODE_PATTERN
        .get_or_init(|| match Regex::new(r"\d+") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile usage code regex");
                None
            }
        })
        .as_ref()
}

/// One decoded usage scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub code: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entry: Vec<UsageEntry>,
}

/// Lookup table from usage code to its description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageCatalog {
    entries: Vec<UsageEntry>,
}

impl UsageCatalog {
    /// The nine-entry catalog shipped with the crate
    pub fn builtin() -> Self {
        match Self::from_toml_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "embedded usage catalog is invalid");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_entries(file.entry))
    }

    /// Load a catalog file; `[[entry]]` tables with `code`, `title`, `text`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::io_operation("read usage catalog", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Later entries with a repeated code replace earlier ones
    pub fn from_entries(entries: Vec<UsageEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            let code = entry.code.trim().to_string();
            let entry = UsageEntry { code, ..entry };
            match catalog.entries.iter_mut().find(|e| e.code == entry.code) {
                Some(existing) => *existing = entry,
                None => catalog.entries.push(entry),
            }
        }
        catalog
    }

    pub fn get(&self, code: &str) -> Option<&UsageEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog entries for the digit codes in `raw`, deduplicated, in order
    /// of first appearance. Unknown codes are skipped.
    pub fn decode(&self, raw: &str) -> Vec<&UsageEntry> {
        codes(raw).iter().filter_map(|c| self.get(c)).collect()
    }

    /// Plain-text rendering for exports, one code and its title per line.
    ///
    /// Unknown codes are listed bare. Without any code the raw text is
    /// returned trimmed.
    pub fn decode_text(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }
        let found = codes(raw);
        if found.is_empty() {
            return raw.to_string();
        }
        found
            .iter()
            .map(|code| match self.get(code) {
                Some(entry) => format!("{} — {}", code, entry.title),
                None => code.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Unique digit runs in order of first appearance
pub fn codes(raw: &str) -> Vec<String> {
    let Some(re) = code_pattern() else {
        return Vec::new();
    };
    let mut found: Vec<String> = Vec::new();
    for m in re.find_iter(raw) {
        let code = m.as_str();
        if !found.iter().any(|c| c == code) {
            found.push(code.to_string());
        }
    }
    found
}
