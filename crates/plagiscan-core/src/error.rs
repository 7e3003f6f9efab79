//! Error types and exit codes for plagiscan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, contract violations at the API boundary)
//! - 3: Data error (missing snapshot, unknown assignment, malformed snapshot)
//!
//! Empty texts and assignments without comparable history are not errors;
//! the engine answers those with a score of 0 or an empty cluster list.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the plagiscan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or invalid engine input (2)
    Usage = 2,
    /// Data error - missing or malformed snapshot (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during plagiscan operations
#[derive(Error, Debug)]
pub enum PlagiscanError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid input for {context}: {reason}")]
    InvalidInput { context: String, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("snapshot not found: {path:?}")]
    SnapshotNotFound { path: PathBuf },

    #[error("invalid snapshot {path:?}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PlagiscanError {
    /// Create an error for a caller contract violation
    pub fn invalid_input(context: &str, reason: impl std::fmt::Display) -> Self {
        PlagiscanError::InvalidInput {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PlagiscanError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PlagiscanError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PlagiscanError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PlagiscanError::UnknownFormat(_)
            | PlagiscanError::UsageError(_)
            | PlagiscanError::InvalidInput { .. }
            | PlagiscanError::InvalidValue { .. } => ExitCode::Usage,

            PlagiscanError::SnapshotNotFound { .. }
            | PlagiscanError::InvalidSnapshot { .. }
            | PlagiscanError::NotFound { .. } => ExitCode::Data,

            PlagiscanError::Io(_)
            | PlagiscanError::Json(_)
            | PlagiscanError::Toml(_)
            | PlagiscanError::FailedOperationWithTarget { .. }
            | PlagiscanError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PlagiscanError::UnknownFormat(_) => "unknown_format",
            PlagiscanError::UsageError(_) => "usage_error",
            PlagiscanError::InvalidInput { .. } => "invalid_input",
            PlagiscanError::InvalidValue { .. } => "invalid_value",
            PlagiscanError::SnapshotNotFound { .. } => "snapshot_not_found",
            PlagiscanError::InvalidSnapshot { .. } => "invalid_snapshot",
            PlagiscanError::NotFound { .. } => "not_found",
            PlagiscanError::Io(_) => "io_error",
            PlagiscanError::Json(_) => "json_error",
            PlagiscanError::Toml(_) => "toml_error",
            PlagiscanError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PlagiscanError::Other(_) => "other",
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

/// Result type alias for plagiscan operations
pub type Result<T> = std::result::Result<T, PlagiscanError>;
