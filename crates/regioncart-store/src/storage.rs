//! # Storage Capability
//!
//! A small string key → string value medium that the stores persist into.
//! The medium is injected, so code never asks "is storage available?":
//! environments without one get [`NoopStorage`].
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        dyn Storage                                      │
//! │                                                                         │
//! │  FileStorage    one <key>.json file per key under a directory          │
//! │                 (written to a temp file, then renamed into place)      │
//! │                                                                         │
//! │  MemoryStorage  HashMap behind a Mutex; tests and ephemeral sessions   │
//! │                                                                         │
//! │  NoopStorage    every read is "absent", every write is skipped         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "regioncart";
const APP_NAME: &str = "regioncart";

/// Key-value medium for persisted records.
///
/// Absence is `Ok(None)`, never an error.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a key that does not exist succeeds.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// File Storage
// =============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Uses the platform data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **Linux**: `~/.local/share/regioncart`
    /// - **macOS**: `~/Library/Application Support/dev.regioncart.regioncart`
    /// - **Windows**: `%APPDATA%\regioncart\regioncart\data`
    pub fn in_platform_dir() -> StoreResult<Self> {
        let dirs =
            ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).ok_or(StoreError::Unavailable)?;
        Ok(FileStorage::new(dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(key, path = %path.display(), "record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the storage with `(key, value)` records.
    pub fn with_records<K, V>(records: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let records = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        MemoryStorage {
            records: Mutex::new(records),
        }
    }

    fn records(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.records().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.records().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.records().remove(key);
        Ok(())
    }
}

// =============================================================================
// No-op Storage
// =============================================================================

/// Storage for environments without a durable medium.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStorage;

impl Storage for NoopStorage {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> StoreResult<()> {
        Ok(())
    }
}
