//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to read from or write to the backing store.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::StoreError(e.to_string())
    }
}
