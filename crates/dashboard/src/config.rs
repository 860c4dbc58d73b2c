//! Dashboard settings
//!
//! Settings are resolved in order of priority:
//! 1. Runtime environment variables (`FINBOARD_LATENCY_MS`, `FINBOARD_SESSION_TTL_HOURS`)
//! 2. JSON file (~/.config/finboard/dashboard.json), missing fields take defaults
//! 3. Built-in defaults

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::User;

/// Settings filename in the Finboard config directory
const SETTINGS_FILE: &str = "dashboard.json";

const LATENCY_ENV: &str = "FINBOARD_LATENCY_MS";
const SESSION_TTL_ENV: &str = "FINBOARD_SESSION_TTL_HOURS";

const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Upper bound on the session window (ten years)
const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

/// Tunables for the mock session backend and the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// The single accepted login email
    pub demo_email: String,
    /// The single accepted login password
    pub demo_password: String,
    /// Profile returned by a successful login
    pub demo_user: User,
    /// Session validity window
    pub session_ttl_hours: i64,
    /// Simulated latency for login, signup and password reset
    pub latency_ms: u64,
    /// Simulated latency for token refresh
    pub refresh_latency_ms: u64,
    /// Delay before dependents re-measure after a desktop sidebar toggle
    pub resize_delay_ms: u64,
    /// Viewport widths below this are treated as mobile
    pub mobile_breakpoint: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            demo_email: "demo@example.com".to_string(),
            demo_password: "password".to_string(),
            demo_user: User::new("1", "carla.sanford@example.com", "Carla Sanford").with_avatar(
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
            ),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            latency_ms: 1000,
            refresh_latency_ms: 500,
            resize_delay_ms: 300,
            mobile_breakpoint: 1200.0,
        }
    }
}

impl DashboardConfig {
    /// Load settings from the config directory, then apply environment overrides
    pub fn load() -> Result<Self> {
        let base = if config::config_exists(SETTINGS_FILE) {
            config::load_json::<Self>(SETTINGS_FILE)?.sanitized()
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    /// Load settings from a specific JSON file (no environment overrides)
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(config::load_json_file::<Self>(path)?.sanitized())
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse dashboard settings JSON")?;
        Ok(config.sanitized())
    }

    /// Settings with no simulated latency, for tests and scripted runs
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            refresh_latency_ms: 0,
            ..Self::default()
        }
    }

    /// Apply `FINBOARD_*` environment overrides; unparseable values are ignored
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(latency) = env_parse::<u64>(LATENCY_ENV) {
            self.latency_ms = latency;
            self.refresh_latency_ms = latency / 2;
        }
        if let Some(ttl) = env_parse::<i64>(SESSION_TTL_ENV) {
            if is_valid_ttl(ttl) {
                self.session_ttl_hours = ttl;
            } else {
                warn!(
                    "Ignoring {}={}: must be between 1 and {} hours",
                    SESSION_TTL_ENV, ttl, MAX_SESSION_TTL_HOURS
                );
            }
        }
        self
    }

    /// Replace out-of-range values read from a settings file with defaults
    fn sanitized(mut self) -> Self {
        if !is_valid_ttl(self.session_ttl_hours) {
            warn!(
                "Ignoring session_ttl_hours={}: must be between 1 and {} hours",
                self.session_ttl_hours, MAX_SESSION_TTL_HOURS
            );
            self.session_ttl_hours = DEFAULT_SESSION_TTL_HOURS;
        }
        self
    }

    /// Get the default settings file path (~/.config/finboard/dashboard.json)
    pub fn default_settings_path() -> Option<PathBuf> {
        config::config_path(SETTINGS_FILE)
    }

    /// Session validity window; out-of-range hours fall back to the default
    pub fn session_ttl(&self) -> chrono::Duration {
        let hours = if is_valid_ttl(self.session_ttl_hours) {
            self.session_ttl_hours
        } else {
            DEFAULT_SESSION_TTL_HOURS
        };
        chrono::Duration::hours(hours)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn refresh_latency(&self) -> Duration {
        Duration::from_millis(self.refresh_latency_ms)
    }

    pub fn resize_delay(&self) -> Duration {
        Duration::from_millis(self.resize_delay_ms)
    }
}

fn is_valid_ttl(hours: i64) -> bool {
    (1..=MAX_SESSION_TTL_HOURS).contains(&hours)
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.demo_email, "demo@example.com");
        assert_eq!(config.demo_password, "password");
        assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
        assert_eq!(config.resize_delay(), Duration::from_millis(300));
        assert_eq!(config.demo_user.id, "1");
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let json = r#"{ "latency_ms": 10, "demo_password": "hunter2" }"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.latency(), Duration::from_millis(10));
        assert_eq!(config.demo_password, "hunter2");
        assert_eq!(config.demo_email, "demo@example.com");
        assert_eq!(config.refresh_latency_ms, 500);
    }

    #[test]
    fn test_invalid_json() {
        assert!(DashboardConfig::from_json("{ latency_ms: }").is_err());
    }

    #[test]
    fn test_instant_has_no_latency() {
        let config = DashboardConfig::instant();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.refresh_latency(), Duration::ZERO);
    }

    #[test]
    fn test_out_of_range_ttl_takes_default() {
        for json in [
            r#"{ "session_ttl_hours": -1 }"#,
            r#"{ "session_ttl_hours": 0 }"#,
            r#"{ "session_ttl_hours": 10000000000 }"#,
        ] {
            let config = DashboardConfig::from_json(json).unwrap();
            assert_eq!(config.session_ttl_hours, 24);
            assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
        }
    }

    #[test]
    fn test_session_ttl_never_overflows() {
        let config = DashboardConfig {
            session_ttl_hours: i64::MAX,
            ..DashboardConfig::instant()
        };
        assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
        assert!(is_valid_ttl(MAX_SESSION_TTL_HOURS));
        assert!(!is_valid_ttl(MAX_SESSION_TTL_HOURS + 1));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{ "session_ttl_hours": 1 }"#).unwrap();
        let config = DashboardConfig::from_file(&path).unwrap();
        assert_eq!(config.session_ttl(), chrono::Duration::hours(1));
    }
}
