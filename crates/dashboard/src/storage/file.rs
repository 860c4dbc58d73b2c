//! File-backed storage implementation
//!
//! Keeps every key in a single JSON object on disk
//! (~/.config/finboard/storage.json by default). The whole document is
//! loaded on open and rewritten on every mutation, which is fine for the
//! handful of small values the dashboard persists.

use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::KeyValueStore;

/// Default filename inside the Finboard config directory
const STORAGE_FILE: &str = "storage.json";

/// JSON-file implementation of KeyValueStore
pub struct FileKeyValueStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is treated as an empty store; the file is created on
    /// the first write. A file that exists but cannot be parsed is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            config::load_json_file(&path)
                .with_context(|| format!("Failed to open storage file: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        debug!(
            "Opened storage file {} ({} keys)",
            path.display(),
            values.len()
        );

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Open the store in the Finboard config directory
    pub fn open_default() -> Result<Self> {
        config::init()?;
        let path = config::config_path(STORAGE_FILE).context("Could not determine config directory")?;
        Self::open(path)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy, write it, then swap it in
    ///
    /// `change` returns false when nothing changed and the write can be
    /// skipped. On a failed write the in-memory values are left untouched.
    fn update(&self, change: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<()> {
        let mut values = self.values.write().unwrap();
        let mut next = values.clone();
        if !change(&mut next) {
            return Ok(());
        }
        config::save_json_file(&self.path, &next)?;
        *values = next;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap();
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|values| values.remove(key).is_some())
    }

    fn clear(&self) -> Result<()> {
        self.update(|values| {
            values.clear();
            true
        })
    }
}
