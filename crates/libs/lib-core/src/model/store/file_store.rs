//! JSON-file backed [`KvStore`].
//!
//! The whole map lives in one JSON object on disk and is mirrored in memory.
//! Writes go to a sibling temp file which is then renamed over the target, so
//! a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::KvStore;
use crate::error::{AppError, Result};

/// Durable key-value store persisted as a JSON object.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    slots: RwLock<BTreeMap<String, String>>,
}

impl FileKvStore {
    /// Open the store at `path`. A missing or empty file is an empty store;
    /// the file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = load_slots(&path)?;
        debug!(path = %path.display(), keys = slots.len(), "Opened key-value store");

        Ok(Self {
            path,
            slots: RwLock::new(slots),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` and persist the result while still holding the write lock.
    fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut slots = self.slots.write();
        let mut next = slots.clone();
        change(&mut next);

        persist(&self.path, &next)?;
        *slots = next;
        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.mutate(|slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.slots.read().contains_key(key) {
            return Ok(());
        }
        self.mutate(|slots| {
            slots.remove(key);
        })
    }
}

fn load_slots(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Key-value store is not a JSON object");
        AppError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn persist(path: &Path, slots: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let json = serde_json::to_string_pretty(slots)
        .map_err(|e| AppError::Storage(format!("Failed to serialize store: {}", e)))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| AppError::Storage(format!("Failed to replace {}: {}", path.display(), e)))?;

    Ok(())
}
