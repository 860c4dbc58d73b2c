//! Configuration and state file helpers for Finboard
//!
//! Everything Finboard keeps on disk lives in one directory
//! (~/.config/finboard/): the optional `dashboard.json` settings file and
//! the key-value `storage.json` that stands in for browser local storage.
//!
//! Call [`init`] at application startup to bootstrap the directory.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Name of the application directory inside the platform config dir
const APP_DIR: &str = "finboard";

/// Initialize the Finboard config directory.
///
/// Creates ~/.config/finboard/ if it doesn't exist.
/// Call this once at application startup.
pub fn init() -> Result<PathBuf> {
    ensure_config_dir()
}

/// Get the Finboard config directory (~/.config/finboard/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Get the path to a file within the Finboard config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Load and parse a JSON file from the Finboard config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("Could not determine config directory")?;
    load_json_file(&path)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Check if a file exists in the Finboard config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.exists())
}

/// Ensure the Finboard config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Save a value as JSON to a file in the Finboard config directory
pub fn save_json<T: Serialize>(filename: &str, value: &T) -> Result<()> {
    let dir = ensure_config_dir()?;
    save_json_file(&dir.join(filename), value)
}

/// Save a value as pretty-printed JSON to an arbitrary path
///
/// The parent directory is created if missing. The file is written to a
/// sibling temp file first and renamed into place, so readers never see a
/// half-written document.
pub fn save_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write config file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("finboard"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path("test.json");
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("finboard/test.json"));
    }

    #[test]
    fn test_save_and_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("values.json");

        let mut values = BTreeMap::new();
        values.insert("isDarkMode".to_string(), "true".to_string());
        save_json_file(&path, &values).unwrap();

        let loaded: BTreeMap<String, String> = load_json_file(&path).unwrap();
        assert_eq!(loaded, values);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_json_file_missing() {
        let dir = TempDir::new().unwrap();
        let result: Result<BTreeMap<String, String>> =
            load_json_file(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<BTreeMap<String, String>> = load_json_file(&path);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }
}
