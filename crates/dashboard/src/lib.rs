//! Dashboard crate - Client state for the Finboard financial dashboard
//!
//! This crate provides the platform-independent pieces every screen relies on:
//! - Key-value storage abstraction (in-memory and file-backed)
//! - Session manager (mock login/signup, token expiry, refresh, logout)
//! - Form validation for the authentication screens
//! - Theme state (dark/light and glass/flat) with persistence
//! - Sidebar/layout state per device class with resize notices
//! - Route table, navigation guard and history
//!
//! This crate has zero UI dependencies; the desktop shell drives it.

pub mod auth;
pub mod config;
pub mod layout;
pub mod models;
pub mod routing;
pub mod storage;
pub mod theme;

pub use auth::{
    AuthError, AuthSession, ForgotPasswordForm, LoginForm, SessionManager, SignupForm,
    ValidationError, is_valid_email,
};
pub use config::DashboardConfig;
pub use layout::{DeviceClass, ResizeNotice, SidebarState};
pub use models::{AuthTokens, User};
pub use routing::{
    APP_TITLE, Access, AuthState, History, NAVIGATION_ITEMS, NavItem, NavigationGuard, Recovery,
    Resolution, Route, document_title,
};
pub use storage::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StorageKey, load_json, remove,
    save_json,
};
pub use theme::{DocumentAttributes, DocumentMarker, DocumentTheme, Palette, ThemeState};
