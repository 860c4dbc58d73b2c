//! Key-value storage traits and implementations
//!
//! This module defines the persistence abstraction used by the session and
//! theme state. Values are JSON text stored under namespaced keys, mirroring
//! browser local storage, so the in-memory and file backends are
//! interchangeable.

mod file;
mod keys;
mod memory;
mod traits;

pub use file::FileKeyValueStore;
pub use keys::StorageKey;
pub use memory::InMemoryKeyValueStore;
pub use traits::{KeyValueStore, load_json, remove, save_json};
