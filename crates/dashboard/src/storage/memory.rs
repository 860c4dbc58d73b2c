//! In-memory storage implementation
//!
//! Used for tests and for sessions that should not outlive the process.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;

/// In-memory implementation of KeyValueStore
///
/// Uses a HashMap protected by an RwLock for thread-safe access.
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap();
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().unwrap();
        values.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.write().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StorageKey, load_json, remove, save_json};

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "\"v\"").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("\"v\""));
        assert!(store.contains("k").unwrap());

        store.remove("k").unwrap();
        assert!(!store.contains("k").unwrap());
        // Removing again is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn test_last_write_wins() {
        let store = InMemoryKeyValueStore::new();
        save_json(&store, StorageKey::DarkMode, &false).unwrap();
        save_json(&store, StorageKey::DarkMode, &true).unwrap();
        let value: Option<bool> = load_json(&store, StorageKey::DarkMode).unwrap();
        assert_eq!(value, Some(true));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_json_decode_error() {
        let store = InMemoryKeyValueStore::new();
        store.set(StorageKey::GlassMode.as_str(), "not-json").unwrap();
        let result: Result<Option<bool>> = load_json(&store, StorageKey::GlassMode);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("isGlassMode"));
    }

    #[test]
    fn test_clear() {
        let store = InMemoryKeyValueStore::new();
        save_json(&store, StorageKey::DarkMode, &true).unwrap();
        save_json(&store, StorageKey::GlassMode, &true).unwrap();
        remove(&store, StorageKey::DarkMode).unwrap();
        assert_eq!(store.len(), 1);
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
