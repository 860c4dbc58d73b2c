//! Integration tests for the dashboard crate
//!
//! These tests drive the session manager, guard, theme and sidebar together
//! over the same store, the way the desktop shell wires them.

use chrono::{Duration, Utc};
use dashboard::storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StorageKey};
use dashboard::{
    AuthError, AuthTokens, DashboardConfig, DeviceClass, DocumentAttributes, DocumentTheme,
    History, NavigationGuard, Resolution, Route, SessionManager, SidebarState, ThemeState,
    load_json, save_json,
};
use std::sync::Arc;
use tempfile::TempDir;

/// Helper to create a session manager with no simulated latency
fn make_manager(store: Arc<dyn KeyValueStore>) -> Arc<SessionManager> {
    Arc::new(SessionManager::new(store, DashboardConfig::instant()))
}

/// Helper to push a stored session's expiry to `expires_at`
fn set_expiry(store: &dyn KeyValueStore, expires_at: chrono::DateTime<Utc>) {
    let mut tokens: AuthTokens = load_json(store, StorageKey::AuthTokens).unwrap().unwrap();
    tokens.expires_at = expires_at;
    save_json(store, StorageKey::AuthTokens, &tokens).unwrap();
}

#[test]
fn test_login_guard_logout_flow() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store);
    let guard = NavigationGuard::new(manager.clone());
    let mut history = History::new();

    // Signed out: protected routes bounce to login
    assert_eq!(history.navigate(&guard, "/reports"), Route::Login);

    manager.login("demo@example.com", "password").unwrap();
    assert_eq!(guard.resolve("/login"), Resolution::Redirect(Route::Dashboard));
    assert_eq!(history.navigate(&guard, "/reports"), Route::Reports);

    manager.logout().unwrap();
    assert!(!manager.is_authenticated());
    assert_eq!(history.revalidate(&guard), Some(Route::Login));
    assert_eq!(guard.resolve("/unknown"), Resolution::Redirect(Route::Login));
}

#[test]
fn test_expired_session_is_signed_out_everywhere() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store.clone());
    let guard = NavigationGuard::new(manager.clone());

    manager.login("demo@example.com", "password").unwrap();
    assert_eq!(guard.resolve("/dashboard"), Resolution::Render(Route::Dashboard));

    // Boundary: expiry equal to now (or earlier) counts as expired
    for expires_at in [Utc::now(), Utc::now() - Duration::hours(1)] {
        set_expiry(store.as_ref(), expires_at);
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert_eq!(guard.resolve("/dashboard"), Resolution::Redirect(Route::Login));
    }

    // User data is still present in storage
    assert!(store.contains(StorageKey::UserData.as_str()).unwrap());
}

#[test]
fn test_expiry_moves_protected_entry_to_login() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store.clone());
    let guard = NavigationGuard::new(manager.clone());
    let mut history = History::new();

    manager.login("demo@example.com", "password").unwrap();
    assert_eq!(history.navigate(&guard, "/profile"), Route::Profile);

    // Re-checking with a live session keeps the page
    assert_eq!(history.revalidate(&guard), Some(Route::Profile));

    set_expiry(store.as_ref(), Utc::now() - Duration::seconds(1));
    assert_eq!(history.revalidate(&guard), Some(Route::Login));
    assert_eq!(history.entries(), &[Route::Login]);
}

#[test]
fn test_demo_login_window_is_24_hours() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store);

    let session = manager.login("demo@example.com", "password").unwrap();
    let expected = Utc::now() + Duration::hours(24);
    let drift = (session.tokens.expires_at - expected).num_seconds().abs();
    assert!(drift <= 5, "expiry drifted by {}s", drift);
}

#[test]
fn test_rejected_login_leaves_store_empty() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store.clone());

    let err = manager.login("demo@example.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(store.is_empty());
}

#[test]
fn test_refresh_requires_prior_login() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store);
    assert!(matches!(manager.refresh_session(), Err(AuthError::NoSession)));

    let session = manager.signup("Ada", "ada@example.com", "secret1").unwrap();
    let renewed = manager.refresh_session().unwrap();
    assert_eq!(renewed.refresh_token, session.tokens.refresh_token);
}

#[test]
fn test_session_survives_reload_with_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&path).unwrap());
        let manager = make_manager(store);
        manager.login("demo@example.com", "password").unwrap();
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&path).unwrap());
    let manager = make_manager(store);
    assert!(manager.is_authenticated());
    assert_eq!(manager.current_user().unwrap().name, "Carla Sanford");

    // Persisted layout uses the documented keys and camelCase fields
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("auth_tokens"));
    assert!(raw.contains("accessToken"));
    assert!(raw.contains("user_data"));
}

#[test]
fn test_all_theme_combinations_persist_across_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    for (dark, glass) in [(false, false), (false, true), (true, false), (true, true)] {
        {
            let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&path).unwrap());
            let mut theme = ThemeState::init(store, Arc::new(DocumentAttributes::new()));
            if theme.is_dark() != dark {
                theme.toggle_dark().unwrap();
            }
            if theme.is_glass() != glass {
                theme.toggle_glass().unwrap();
            }
        }

        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&path).unwrap());
        let document = Arc::new(DocumentAttributes::new());
        let reloaded = ThemeState::init(store, document.clone());
        assert_eq!((reloaded.is_dark(), reloaded.is_glass()), (dark, glass));
        assert_eq!(document.theme(), Some(DocumentTheme::from_dark(dark)));
    }
}

#[test]
fn test_theme_and_session_share_a_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
    let manager = make_manager(store.clone());
    let mut theme = ThemeState::init(store.clone(), Arc::new(DocumentAttributes::new()));

    manager.login("demo@example.com", "password").unwrap();
    theme.toggle_dark().unwrap();
    manager.logout().unwrap();

    // Logout only clears session keys
    let dark: Option<bool> = load_json(store.as_ref(), StorageKey::DarkMode).unwrap();
    assert_eq!(dark, Some(true));
}

#[test]
fn test_sidebar_responsive_sequence() {
    let config = DashboardConfig::default();
    let mut sidebar = SidebarState::new(
        DeviceClass::from_width(1440.0, config.mobile_breakpoint),
        config.resize_delay(),
    );

    // Desktop open -> shrink to mobile: overlay starts closed
    assert!(sidebar.is_open());
    sidebar.set_viewport_width(768.0, config.mobile_breakpoint);
    assert!(sidebar.is_mobile());
    assert!(!sidebar.is_open());

    // Open the overlay, then widen: overlay state is dropped
    sidebar.toggle();
    assert!(sidebar.is_open());
    sidebar.set_viewport_width(1600.0, config.mobile_breakpoint);
    sidebar.set_viewport_width(768.0, config.mobile_breakpoint);
    assert!(!sidebar.is_open());

    // Back on desktop, close() is ignored and toggle schedules a notice
    sidebar.set_viewport_width(1600.0, config.mobile_breakpoint);
    sidebar.close();
    assert!(sidebar.is_open());
    let notice = sidebar.toggle().unwrap();
    assert_eq!(notice.delay, config.resize_delay());
    assert!(notice.is_current(&sidebar));
}
