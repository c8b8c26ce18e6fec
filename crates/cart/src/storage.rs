//! Durable key-value storage seam.
//!
//! The cart survives page loads in a browser-style key-value store: one named
//! entry under a fixed namespace key. The [`StorageBackend`] trait is the seam
//! between the store and whatever durability the host provides; reads never
//! fail (a broken entry degrades to "no entry"), only writes do.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

/// Errors that can occur when writing a storage entry.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be written.
    #[error("Failed to write entry {key}: {source}")]
    Write {
        /// Namespace key of the entry.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Origin-scoped durable key-value persistence.
///
/// Implementations are synchronous and single-threaded, matching the UI-thread
/// model of the subsystem. Read-side failures are swallowed (with a log line)
/// so a damaged entry can never take the page down.
pub trait StorageBackend {
    /// Read the raw value stored under `key`, or `None` if absent/unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be durably written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and ephemeral sessions.
///
/// Interior mutability keeps the trait object shareable from a `&CartStore`
/// on the single UI thread.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per entry under a directory.
///
/// The closest native analog to origin-scoped browser storage. An unreadable
/// or missing file reads as `None`, mirroring the browser fallback behavior.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "storage entry unreadable, treating as absent");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let wrap = |source: io::Error| StorageError::Write {
            key: key.to_owned(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(wrap)?;
        fs::write(self.entry_path(key), value).map_err(wrap)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart"), None);

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").as_deref(), Some("[]"));

        storage.write("cart", r#"[{"id":"startklar","qty":1}]"#).unwrap();
        assert_eq!(
            storage.read("cart").as_deref(),
            Some(r#"[{"id":"startklar","qty":1}]"#)
        );
    }

    #[test]
    fn test_file_roundtrip_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read("cart"), None);
        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").as_deref(), Some("[]"));
        assert!(dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_file_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("cart");
        let storage = FileStorage::new(&nested);

        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").as_deref(), Some("[]"));
    }
}
