//! CLI-specific error types
//!
//! Everything here is fatal: main prints the error and exits non-zero.

use thiserror::Error;

use crate::http_server::ConfigError;
use crate::rest_api::InvalidCollectionName;
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad server configuration (environment or flags)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected `--collection` flag value
    #[error("{0}")]
    Registry(#[from] InvalidCollectionName),

    /// Data file could not be opened
    #[error("Failed to open store: {0}")]
    Store(#[from] StoreError),

    /// Runtime or server I/O failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_message() {
        let err = CliError::from(InvalidCollectionName("Bad Name".to_string()));
        assert_eq!(err.to_string(), "Invalid collection name: Bad Name");
    }
}
