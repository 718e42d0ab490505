//! Key-value blob backends
//!
//! The expense store persists its whole collection as one text blob under a
//! fixed key. Backends only need to get and set such blobs.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

use super::file_io::{read_text_if_exists, write_atomic};

/// A key-value store of text blobs
pub trait StorageBackend {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&self, key: &str, value: &str) -> ExpenseResult<()>;
}

/// One JSON file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileBackend {
    paths: ExpensePaths,
}

impl FileBackend {
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_text_if_exists(self.paths.blob_file(key))
    }

    fn set(&self, key: &str, value: &str) -> ExpenseResult<()> {
        write_atomic(self.paths.blob_file(key), value.as_bytes())
    }
}

/// In-memory blobs, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a backend with an existing blob
    pub fn with_blob(key: &str, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.blobs.borrow_mut().insert(key.to_string(), value.into());
        backend
    }

    /// Number of `set` calls made so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ExpenseResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("expenses").unwrap(), None);

        backend.set("expenses", "[]").unwrap();
        assert_eq!(backend.get("expenses").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let backend = FileBackend::new(paths.clone());

        assert_eq!(backend.get("expenses").unwrap(), None);

        backend.set("expenses", r#"[{"a":1}]"#).unwrap();
        assert!(paths.blob_file("expenses").exists());
        assert_eq!(
            backend.get("expenses").unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );
    }
}
