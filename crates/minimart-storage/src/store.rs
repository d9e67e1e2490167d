//! The storage trait with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Durable key-value storage.
///
/// Implementors provide raw string reads and writes; typed access with
/// automatic JSON serialization comes for free. Writes are synchronous:
/// when `write` returns, the value is durable as far as the backing
/// store can guarantee.
pub trait Storage {
    /// Read the raw value stored under a key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value under a key, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under a key.
    ///
    /// Deleting an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;

    /// List all stored keys.
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.read(key)?.is_some())
    }

    /// Get a value, deserialized from JSON.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = store.get("minimart.cart")?;
    /// ```
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value, serialized to JSON.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("minimart.cart", &lines)?;
    /// ```
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.write(key, &raw)
    }
}
