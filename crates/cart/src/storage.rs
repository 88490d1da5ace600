//! Durable key-value storage for cart snapshots.
//!
//! The cart persists its state to a single named slot in a key-value
//! store, the way a browser storefront uses local storage. The
//! [`StorageAdapter`] trait is the seam: the engine only ever calls
//! `get` and `set`, so the backend (a data directory on disk, an
//! in-memory map for tests) is swappable.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Errors that can occur in a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The slot key is empty or contains path-unsafe characters.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Filesystem operation failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A durable key-value slot.
///
/// `get` returns the raw stored string, or `None` when the key has never
/// been written. `set` replaces the slot's value; a completed `set` must
/// survive a process restart.
pub trait StorageAdapter {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be
    /// read. Callers recovering state treat errors like an absent value.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the write fails. The
    /// previous value must remain intact when the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Validate that a key is usable as a file stem.
fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

/// File-backed storage: one file per key under a data directory.
///
/// Writes go to a temporary file followed by a rename, so a crash
/// mid-write leaves the previous snapshot intact rather than a truncated
/// slot.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open file storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create storage pre-seeded with `value` under `key`.
    ///
    /// Useful for tests that start from an existing snapshot.
    #[must_use]
    pub fn seeded(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Check whether a file exists under a storage directory.
///
/// Diagnostic helper for tests and tooling; the engine itself only uses
/// `get`/`set`.
#[must_use]
pub fn slot_exists(dir: &Path, key: &str) -> bool {
    dir.join(format!("{key}.json")).exists()
}
