//! Error types for the persistence layer.
//!
//! The listing pipeline itself never fails: malformed input degrades to an
//! absent filter and out-of-range pages produce an empty slice. Errors only
//! surface from single-record lookups and from backends that do I/O.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for repository operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No record carries the requested id.
    #[error("consulta not found: {id}")]
    NotFound { id: i64 },

    /// The backend could not serve the request.
    #[error("backend error ({backend_name}): {message}")]
    Backend {
        backend_name: String,
        message: String,
    },
}

impl StorageError {
    /// Creates a not-found error for the given record id.
    pub fn not_found(id: i64) -> Self {
        StorageError::NotFound { id }
    }

    /// Returns true if this error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Result type alias for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;
