//! File-backed storage backend.

use crate::{Storage, StorageError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Storage backed by a single JSON document on disk.
///
/// The whole document (a map of key to raw JSON string) is read once at
/// open and rewritten synchronously on every mutation. That keeps write
/// ordering deterministic: when a mutating call returns, the file
/// matches the in-memory map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path, creating it on first write.
    ///
    /// A missing file is an empty store. A file that exists but cannot
    /// be parsed is reported as an open error rather than silently
    /// clobbered.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StorageError::OpenError(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::OpenError(format!("{}: {}", path.display(), e))),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_path(name: &str) -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("minimart-storage-{}-{}-{}.json", name, std::process::id(), n))
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let path = temp_path("missing");
        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("minimart.cart", &vec!["a", "b"]).unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        let value: Option<Vec<String>> = store.get("minimart.cart").unwrap();
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_delete_persists() {
        let path = temp_path("delete");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.write("k", "v").unwrap();
            store.delete("k").unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert!(store.read("k").unwrap().is_none());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_garbage_file_is_open_error() {
        let path = temp_path("garbage");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::OpenError(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
