//! Error types for Studylog core operations.
//!
//! The taxonomy is deliberately narrow: operations referencing an unknown id
//! are silent no-ops rather than errors, and an unreadable stored blob is
//! recovered as an empty collection on load. What remains here are real
//! storage faults the caller has to see.

use thiserror::Error;

/// Result type alias for Studylog operations.
pub type Result<T> = std::result::Result<T, StudyError>;

/// Core error type for Studylog operations.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failed to encode a collection for storage
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for StudyError {
    fn from(err: std::io::Error) -> Self {
        StudyError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StudyError {
    fn from(err: serde_json::Error) -> Self {
        StudyError::Serialization(err.to_string())
    }
}
