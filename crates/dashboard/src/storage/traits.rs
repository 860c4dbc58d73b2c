//! Storage trait definitions

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::StorageKey;

/// Trait for key-value storage operations
///
/// This trait abstracts over different storage backends (in-memory, JSON file)
/// and stores raw JSON text per key, like browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value for a key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the raw value for a key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key (no-op if absent)
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Clear all data (for testing)
    fn clear(&self) -> Result<()>;
}

/// Load and decode a JSON value stored under `key`
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>> {
    match store.get(key.as_str())? {
        Some(raw) => {
            let value = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to decode stored value for '{}'", key))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode a value as JSON and store it under `key`
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to encode value for '{}'", key))?;
    store.set(key.as_str(), &raw)
}

/// Remove the value stored under `key`
pub fn remove(store: &dyn KeyValueStore, key: StorageKey) -> Result<()> {
    store.remove(key.as_str())
}
