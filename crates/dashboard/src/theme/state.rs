//! Dark/glass mode state machine

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::{DocumentMarker, DocumentTheme, Palette};
use crate::storage::{KeyValueStore, StorageKey, load_json, save_json};

const DEFAULT_DARK: bool = false;
const DEFAULT_GLASS: bool = true;

/// Current visual mode
///
/// Any of the four (dark, glass) combinations is reachable from any other
/// with at most one toggle per flag.
pub struct ThemeState {
    store: Arc<dyn KeyValueStore>,
    marker: Arc<dyn DocumentMarker>,
    dark: bool,
    glass: bool,
}

impl ThemeState {
    /// Read both flags from the store (absent or unreadable values take the
    /// defaults: light, glass) and apply the document marker.
    pub fn init(store: Arc<dyn KeyValueStore>, marker: Arc<dyn DocumentMarker>) -> Self {
        let dark = read_flag(store.as_ref(), StorageKey::DarkMode, DEFAULT_DARK);
        let glass = read_flag(store.as_ref(), StorageKey::GlassMode, DEFAULT_GLASS);
        debug!("Theme initialized: dark={}, glass={}", dark, glass);

        let state = Self {
            store,
            marker,
            dark,
            glass,
        };
        state.marker.apply(state.document_theme());
        state
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn is_glass(&self) -> bool {
        self.glass
    }

    pub fn document_theme(&self) -> DocumentTheme {
        DocumentTheme::from_dark(self.dark)
    }

    /// Colors for the current combination
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.dark, self.glass)
    }

    /// Flip dark mode, persist it and update the document marker.
    /// Returns the new value.
    ///
    /// The in-memory flag and marker change even if persisting fails; the
    /// error is returned so the caller can report it.
    pub fn toggle_dark(&mut self) -> Result<bool> {
        self.set_dark(!self.dark)?;
        Ok(self.dark)
    }

    /// Flip glass mode and persist it. Returns the new value.
    pub fn toggle_glass(&mut self) -> Result<bool> {
        self.set_glass(!self.glass)?;
        Ok(self.glass)
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<()> {
        self.dark = dark;
        self.marker.apply(self.document_theme());
        debug!("Dark mode {}", if dark { "on" } else { "off" });
        save_json(self.store.as_ref(), StorageKey::DarkMode, &dark)
    }

    pub fn set_glass(&mut self, glass: bool) -> Result<()> {
        self.glass = glass;
        debug!("Glass mode {}", if glass { "on" } else { "off" });
        save_json(self.store.as_ref(), StorageKey::GlassMode, &glass)
    }
}

fn read_flag(store: &dyn KeyValueStore, key: StorageKey, default: bool) -> bool {
    match load_json(store, key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            warn!("Using default for {}: {:#}", key, e);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use crate::theme::DocumentAttributes;

    fn fresh() -> (Arc<InMemoryKeyValueStore>, Arc<DocumentAttributes>, ThemeState) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let doc = Arc::new(DocumentAttributes::new());
        let state = ThemeState::init(store.clone(), doc.clone());
        (store, doc, state)
    }

    #[test]
    fn test_defaults() {
        let (store, doc, state) = fresh();
        assert!(!state.is_dark());
        assert!(state.is_glass());
        assert_eq!(doc.theme(), Some(DocumentTheme::Light));
        // Defaults are not written until something changes
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_dark_is_involutive() {
        let (_store, doc, mut state) = fresh();
        assert!(state.toggle_dark().unwrap());
        assert_eq!(doc.theme(), Some(DocumentTheme::Dark));
        assert!(!state.toggle_dark().unwrap());
        assert_eq!(doc.theme(), Some(DocumentTheme::Light));
        assert!(state.is_glass());
    }

    #[test]
    fn test_toggle_glass_persists_immediately() {
        let (store, _doc, mut state) = fresh();
        assert!(!state.toggle_glass().unwrap());
        let stored: Option<bool> = load_json(store.as_ref(), StorageKey::GlassMode).unwrap();
        assert_eq!(stored, Some(false));
    }

    #[test]
    fn test_reload_reads_persisted_values() {
        let (store, _doc, mut state) = fresh();
        state.toggle_dark().unwrap();
        state.toggle_glass().unwrap();

        let doc = Arc::new(DocumentAttributes::new());
        let reloaded = ThemeState::init(store.clone(), doc.clone());
        assert!(reloaded.is_dark());
        assert!(!reloaded.is_glass());
        assert_eq!(doc.theme(), Some(DocumentTheme::Dark));
    }

    #[test]
    fn test_unreadable_values_fall_back_to_defaults() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("isDarkMode", "maybe").unwrap();
        store.set("isGlassMode", "false").unwrap();
        let state = ThemeState::init(store, Arc::new(DocumentAttributes::new()));
        assert!(!state.is_dark());
        assert!(!state.is_glass());
    }

    #[test]
    fn test_palette_follows_flags() {
        let (_store, _doc, mut state) = fresh();
        let light_glass = state.palette();
        state.toggle_dark().unwrap();
        assert_ne!(state.palette(), light_glass);
        assert_eq!(state.palette(), Palette::resolve(true, true));
    }
}
