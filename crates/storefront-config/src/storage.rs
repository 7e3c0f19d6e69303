//! Key-value storage backends
//!
//! The client state is persisted the way a browser persists to local
//! storage: string keys mapping to JSON documents, overwritten on every
//! write. Two backends are provided:
//!
//! - [`MemoryStorage`] - in-process map, clones share the same entries
//! - [`FileStorage`] - all entries in one JSON object file, rewritten on each mutation
//!
//! Reads through [`load_json`] never fail: a missing key, a backend error or
//! a document that no longer parses all degrade to `None`.

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage medium for persisted client state
///
/// Writes are plain overwrites; there are no transactions, the last write
/// to a key wins.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load and deserialize the JSON document stored under `key`
///
/// Returns `None` if the key is absent or the stored value can't be read.
pub fn load_json<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to read storage key '{}': {:#}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unparseable value under '{}': {}", key, e);
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize value for '{}'", key))?;
    storage.set(key, &raw)
}

type Entries = BTreeMap<String, String>;

fn lock(entries: &Mutex<Entries>) -> Result<MutexGuard<'_, Entries>> {
    entries.lock().map_err(|_| anyhow!("storage lock poisoned"))
}

/// In-memory storage
///
/// Cloning yields a handle onto the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<Entries>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

/// File-backed storage
///
/// All entries live in a single JSON object. The file is read once on
/// [`FileStorage::open`] and rewritten after every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStorage {
    /// Open the storage file at `path`, creating parent directories as needed
    ///
    /// A missing file opens as empty storage. So does a file that can't be
    /// read or parsed; it is overwritten by the next mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create storage directory: {:?}", parent)
                })?;
            }
        }

        let entries = Self::read_entries(&path);
        log::info!("Opened storage {:?} with {} keys", path, entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Entries {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No storage file at {:?}, starting fresh", path);
                return BTreeMap::new();
            }
            Err(e) => {
                log::warn!("Failed to read storage file {:?}: {}", path, e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to parse storage file {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    fn flush(&self, entries: &Entries) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize storage")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write storage file: {:?}", self.path))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = lock(&self.entries)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = lock(&self.entries)?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
