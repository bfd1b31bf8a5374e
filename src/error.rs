//! Error types for gosdk operations.
//!
//! Validation outcomes are not errors: they are reported as
//! [`ValidationResult`](crate::validation::ValidationResult) values. This
//! module covers the operational failures around the model, such as a bad
//! persisted field map or an unreadable settings file.
//!
//! # Error Handling Strategy
//!
//! - Use `SdkError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SdkError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gosdk operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A persisted field map used a key the model does not know.
    #[error("Unknown field key: {key}")]
    UnknownField { key: String },

    /// A value outside a field's closed set of choices.
    #[error("Invalid value '{value}' for {field}: expected one of {expected}")]
    InvalidFieldValue {
        field: String,
        value: String,
        expected: String,
    },

    /// Failed to parse a settings file or field map.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gosdk operations.
pub type Result<T> = std::result::Result<T, SdkError>;
