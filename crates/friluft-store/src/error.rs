//! Error types for local storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing local state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Validation error (e.g., threshold minimum above maximum, malformed time).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem error while touching the preferences file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences file could not be serialized or parsed.
    #[error("Preferences format error: {0}")]
    Format(String),

    /// A blocking storage task failed to complete.
    #[error("Storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    /// Create a not found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
