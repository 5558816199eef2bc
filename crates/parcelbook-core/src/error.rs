//! Error types and exit codes for parcelbook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, network, serialization)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing dataset, unknown record, invalid notes file)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the parcelbook CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset, unknown record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("record not found: {selector}")]
    RecordNotFound { selector: String },

    #[error("record has no cadastral number: {selector}")]
    MissingCadastral { selector: String },

    #[error("invalid notes file {path:?}: {reason}")]
    InvalidNotesFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("notes service unavailable: {reason}")]
    NotesUnavailable { reason: String },

    #[error("notes service rejected the request (HTTP {status})")]
    NotesRejected { status: u16 },

    #[error("AI description failed: {0}")]
    Describe(#[from] crate::ai::DescribeError),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CatalogError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CatalogError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record selector that matched nothing
    pub fn record_not_found(selector: impl Into<String>) -> Self {
        CatalogError::RecordNotFound {
            selector: selector.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CatalogError::UnknownFormat(_)
            | CatalogError::UsageError(_)
            | CatalogError::InvalidValue { .. } => ExitCode::Usage,

            CatalogError::DatasetNotFound { .. }
            | CatalogError::InvalidDataset { .. }
            | CatalogError::RecordNotFound { .. }
            | CatalogError::MissingCadastral { .. }
            | CatalogError::InvalidNotesFile { .. } => ExitCode::Data,

            CatalogError::Io(_)
            | CatalogError::Json(_)
            | CatalogError::Toml(_)
            | CatalogError::Csv(_)
            | CatalogError::NotesUnavailable { .. }
            | CatalogError::NotesRejected { .. }
            | CatalogError::Describe(_)
            | CatalogError::FailedOperationWithTarget { .. }
            | CatalogError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CatalogError::UnknownFormat(_) => "unknown_format",
            CatalogError::UsageError(_) => "usage_error",
            CatalogError::InvalidValue { .. } => "invalid_value",
            CatalogError::DatasetNotFound { .. } => "dataset_not_found",
            CatalogError::InvalidDataset { .. } => "invalid_dataset",
            CatalogError::RecordNotFound { .. } => "record_not_found",
            CatalogError::MissingCadastral { .. } => "missing_cadastral",
            CatalogError::InvalidNotesFile { .. } => "invalid_notes_file",
            CatalogError::Io(_) => "io_error",
            CatalogError::Json(_) => "json_error",
            CatalogError::Toml(_) => "toml_error",
            CatalogError::Csv(_) => "csv_error",
            CatalogError::NotesUnavailable { .. } => "notes_unavailable",
            CatalogError::NotesRejected { .. } => "notes_rejected",
            CatalogError::Describe(err) if err.is_not_configured() => "ai_not_configured",
            CatalogError::Describe(_) => "ai_failed",
            CatalogError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CatalogError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::DescribeError;

    #[test]
    fn test_exit_codes_by_group() {
        assert_eq!(
            CatalogError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CatalogError::record_not_found("#4").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            CatalogError::NotesRejected { status: 500 }.exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_shape() {
        let json = CatalogError::record_not_found("04:05:1").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "record_not_found");
        assert_eq!(json["error"]["message"], "record not found: 04:05:1");
    }

    #[test]
    fn test_not_configured_type() {
        let err: CatalogError = DescribeError::NotConfigured.into();
        assert_eq!(err.to_json()["error"]["type"], "ai_not_configured");
    }
}
