//! Key-value persistence for cart snapshots.
//!
//! [`KeyValueStore`] abstracts the flat string-keyed store the cart
//! persists into. Implementations use interior mutability so the trait
//! works through shared references; any backend with round-trip fidelity
//! satisfies the contract.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Error from the file-backed store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A flat string-keyed store for serialized snapshots.
pub trait KeyValueStore {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the read itself fails.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails.
    fn put(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value by key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the removal fails.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-memory store backed by a map.
///
/// The test double, and the "in-memory with external flush" rendition of
/// the persistence contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.cells
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.cells().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.cells().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.cells().remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` document per key under a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn cell_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.cell_path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write-then-rename so an interrupted write never leaves a torn cell.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        let path = self.cell_path(key);
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.cell_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}
