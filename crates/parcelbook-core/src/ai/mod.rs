//! AI description client
//!
//! The describe endpoint takes a record and the current note text and
//! returns generated listing text. A missing backend is reported as
//! [`DescribeError::NotConfigured`], distinct from ordinary failures.

mod http;

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::notes::NoteEntry;
use crate::record::ParcelRecord;

pub use http::HttpDescribeClient;

/// Failures of a describe call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("AI description is not configured")]
    NotConfigured,

    #[error("AI service returned HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("AI service unreachable: {0}")]
    Transport(String),

    #[error("AI service returned an empty text")]
    EmptyResponse,

    #[error("AI service returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl DescribeError {
    /// Whether the AI action should stay disabled for the session
    pub fn is_not_configured(&self) -> bool {
        matches!(self, DescribeError::NotConfigured)
    }
}

/// Body of `POST /ai/describe`
#[derive(Debug, Clone, Serialize)]
pub struct DescribeRequest<'a> {
    pub record: &'a ParcelRecord,
    pub existing_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl<'a> DescribeRequest<'a> {
    pub fn new(record: &'a ParcelRecord, existing_note: String) -> Self {
        Self {
            record,
            existing_note,
            instruction: None,
        }
    }

    /// Blank instructions are dropped
    pub fn with_instruction(mut self, instruction: Option<&str>) -> Self {
        self.instruction = instruction
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }
}

/// Text sent as `existing_note`: the saved description when there is one,
/// otherwise the current draft
pub fn existing_note_for(note: Option<&NoteEntry>, draft: &str) -> String {
    let saved = note.map(|n| n.description().trim()).unwrap_or_default();
    if saved.is_empty() {
        draft.trim().to_string()
    } else {
        saved.to_string()
    }
}

/// Collaborator generating listing text
pub trait DescribeBackend {
    fn describe(&self, request: &DescribeRequest<'_>) -> Result<String, DescribeError>;

    /// `false` when calls can only ever fail with `NotConfigured`
    fn is_configured(&self) -> bool {
        true
    }
}

/// Backend used when no describe endpoint is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredDescribe;

impl DescribeBackend for UnconfiguredDescribe {
    fn describe(&self, _request: &DescribeRequest<'_>) -> Result<String, DescribeError> {
        Err(DescribeError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}

/// HTTP client for a configured URL, otherwise [`UnconfiguredDescribe`]
pub fn backend_for(url: Option<&str>, timeout: Duration) -> Box<dyn DescribeBackend> {
    match url.map(str::trim).filter(|u| !u.is_empty()) {
        Some(url) => Box::new(HttpDescribeClient::new(url, timeout)),
        None => Box::new(UnconfiguredDescribe),
    }
}
