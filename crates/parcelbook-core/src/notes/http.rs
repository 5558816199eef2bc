//! Notes service client (`GET /notes`, `POST /notes`)

use std::time::Duration;

use tracing::{debug, warn};
use ureq::Agent;

use super::{NoteUpdate, NotesBackend, NotesMap};
use crate::error::{CatalogError, Result};
use crate::http::{self, DEFAULT_TIMEOUT_SECONDS};

/// Notes held by a remote notes service
pub struct HttpNotesBackend {
    base_url: String,
    agent: Agent,
}

impl HttpNotesBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
            agent: http::build_agent(timeout),
        }
    }

    fn endpoint(&self) -> String {
        http::join_url(&self.base_url, "notes")
    }
}

impl NotesBackend for HttpNotesBackend {
    fn fetch_all(&self) -> Result<NotesMap> {
        let url = self.endpoint();
        let reply = http::get(&self.agent, &url).map_err(|e| {
            warn!(url = %url, error = %e, "notes fetch failed");
            CatalogError::NotesUnavailable {
                reason: e.to_string(),
            }
        })?;

        if !reply.is_success() {
            warn!(url = %url, status = reply.status, "notes fetch rejected");
            return Err(CatalogError::NotesRejected {
                status: reply.status,
            });
        }

        // A payload that is not an object reads as no notes
        let value: serde_json::Value =
            serde_json::from_str(&reply.body).map_err(|e| CatalogError::NotesUnavailable {
                reason: format!("invalid notes payload: {}", e),
            })?;
        if !value.is_object() {
            warn!(url = %url, "notes payload is not an object");
            return Ok(NotesMap::new());
        }
        let notes: NotesMap =
            serde_json::from_value(value).map_err(|e| CatalogError::NotesUnavailable {
                reason: format!("invalid notes payload: {}", e),
            })?;

        debug!(url = %url, notes = notes.len(), "fetch_notes");
        Ok(notes)
    }

    fn save(&self, update: &NoteUpdate) -> Result<()> {
        let url = self.endpoint();
        let payload = serde_json::to_string(update)?;
        let reply = http::post_json(&self.agent, &url, payload).map_err(|e| {
            warn!(url = %url, error = %e, "notes save failed");
            CatalogError::NotesUnavailable {
                reason: e.to_string(),
            }
        })?;

        if !reply.is_success() {
            warn!(url = %url, status = reply.status, "notes save rejected");
            return Err(CatalogError::NotesRejected {
                status: reply.status,
            });
        }

        debug!(cadastral = %update.cadastral_number, "save_note");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("service {}", self.base_url)
    }
}
