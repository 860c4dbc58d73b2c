//! Client-side routing
//!
//! The route table, the guard that decides between rendering and
//! redirecting based on the session, a browser-like history, and the
//! sidebar navigation entries.

mod guard;
mod history;
mod nav;
mod route;

pub use guard::{AuthState, NavigationGuard, Resolution};
pub use history::{History, Recovery};
pub use nav::{APP_TITLE, NAVIGATION_ITEMS, NavItem, document_title};
pub use route::{Access, Route, normalize_path};
