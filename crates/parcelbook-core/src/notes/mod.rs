//! Notes: free-text description and listing link per cadastral number
//!
//! The authoritative store lives behind a [`NotesBackend`] (the HTTP notes
//! service, or a local JSON file). [`NotesCache`] is the client-side mirror;
//! it only changes after a backend confirmed a save.

mod file;
mod http;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use file::FileNotesBackend;
pub use http::HttpNotesBackend;

/// Server-persisted note for one primary cadastral identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avito_link: Option<String>,
    /// Fields written by other clients, kept on rewrite
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NoteEntry {
    /// Description text, empty when unset
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Listing link, empty when unset
    pub fn avito_link(&self) -> &str {
        self.avito_link.as_deref().unwrap_or_default()
    }

    /// Overwrite the fields present in the update, leave the rest
    pub fn merge(&mut self, update: &NoteUpdate) {
        if let Some(description) = &update.description {
            self.description = Some(description.clone());
        }
        if let Some(link) = &update.avito_link {
            self.avito_link = Some(link.clone());
        }
    }
}

/// Partial update sent to the notes store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub cadastral_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avito_link: Option<String>,
}

impl NoteUpdate {
    /// Update carrying a new description, stored exactly as typed
    pub fn description(cadastral: &str, description: &str) -> Self {
        Self {
            cadastral_number: cadastral.trim().to_string(),
            description: Some(description.to_string()),
            avito_link: None,
        }
    }

    /// Update carrying a new listing link, trimmed
    pub fn avito_link(cadastral: &str, link: &str) -> Self {
        Self {
            cadastral_number: cadastral.trim().to_string(),
            description: None,
            avito_link: Some(link.trim().to_string()),
        }
    }
}

/// Mapping from primary cadastral identifier to its note
pub type NotesMap = BTreeMap<String, NoteEntry>;

/// Collaborator that owns the persisted notes
pub trait NotesBackend {
    /// Fetch every stored note
    fn fetch_all(&self) -> Result<NotesMap>;

    /// Persist a partial update; `Ok` only once the store acknowledged it
    fn save(&self, update: &NoteUpdate) -> Result<()>;

    /// Short description for logs and status output
    fn describe(&self) -> String;
}

/// Client-side mirror of the notes store
#[derive(Debug, Clone, Default)]
pub struct NotesCache {
    entries: NotesMap,
}

impl NotesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cadastral: &str) -> Option<&NoteEntry> {
        self.entries.get(cadastral)
    }

    /// Note for a cadastral id, or an empty one
    pub fn entry_or_default(&self, cadastral: &str) -> NoteEntry {
        self.get(cadastral).cloned().unwrap_or_default()
    }

    pub fn replace_all(&mut self, entries: NotesMap) {
        self.entries = entries;
    }

    /// Merge a confirmed update into the mirror
    pub fn apply_update(&mut self, update: &NoteUpdate) {
        self.entries
            .entry(update.cadastral_number.clone())
            .or_default()
            .merge(update);
    }

    /// Refresh from the backend. A failed fetch leaves an empty cache.
    pub fn refresh(&mut self, backend: &dyn NotesBackend) -> Result<usize> {
        match backend.fetch_all() {
            Ok(entries) => {
                self.entries = entries;
                Ok(self.entries.len())
            }
            Err(e) => {
                self.entries.clear();
                Err(e)
            }
        }
    }

    /// Save through the backend; the mirror changes only on success
    pub fn save(&mut self, backend: &dyn NotesBackend, update: &NoteUpdate) -> Result<()> {
        backend.save(update)?;
        self.apply_update(update);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// HTTP service when a URL is configured, otherwise the local file
pub fn backend_for(url: Option<&str>, file: PathBuf) -> Box<dyn NotesBackend> {
    match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => Box::new(HttpNotesBackend::new(url)),
        None => Box::new(FileNotesBackend::new(file)),
    }
}
