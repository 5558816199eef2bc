//! Local JSON-file notes store

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{NoteUpdate, NotesBackend, NotesMap};
use crate::error::{CatalogError, Result};

/// Notes kept in a single JSON object on disk, keyed by cadastral id.
///
/// The file is created as `{}` on first use. Writes go to a sibling temp
/// file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileNotesBackend {
    path: PathBuf,
}

impl FileNotesBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::io_operation("create notes directory", parent.display(), e)
                })?;
            }
        }
        fs::write(&self.path, "{}")
            .map_err(|e| CatalogError::io_operation("create notes file", self.path.display(), e))
    }

    fn read(&self) -> Result<NotesMap> {
        self.ensure_file()?;
        let content = fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::io_operation("read notes file", self.path.display(), e))?;
        if content.trim().is_empty() {
            return Ok(NotesMap::new());
        }

        serde_json::from_str(&content).map_err(|e| CatalogError::InvalidNotesFile {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write(&self, notes: &NotesMap) -> Result<()> {
        let content = serde_json::to_string_pretty(notes)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| CatalogError::io_operation("write notes file", tmp.display(), e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            warn!(error = %e, "notes rename failed");
            CatalogError::io_operation("replace notes file", self.path.display(), e)
        })
    }
}

impl NotesBackend for FileNotesBackend {
    fn fetch_all(&self) -> Result<NotesMap> {
        let notes = self.read()?;
        debug!(path = %self.path.display(), notes = notes.len(), "fetch_notes");
        Ok(notes)
    }

    fn save(&self, update: &NoteUpdate) -> Result<()> {
        if update.cadastral_number.trim().is_empty() {
            return Err(CatalogError::UsageError(
                "missing cadastral_number".to_string(),
            ));
        }

        let mut notes = self.read()?;
        notes
            .entry(update.cadastral_number.clone())
            .or_default()
            .merge(update);
        self.write(&notes)?;
        debug!(cadastral = %update.cadastral_number, "save_note");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
