//! # Store Errors
//!
//! Error types for the document store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier is not 24 hex characters
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    /// Document body must be a JSON object
    #[error("Document body must be a JSON object")]
    NotAnObject,

    /// Snapshot file I/O failure
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file exists but does not parse
    #[error("Snapshot is corrupt: {0}")]
    Corrupt(String),

    /// A store lock was poisoned by a panicking thread
    #[error("Store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid document id: abc");

        let err = StoreError::NotAnObject;
        assert!(err.to_string().contains("JSON object"));
    }
}
