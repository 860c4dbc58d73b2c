//! Route protection
//!
//! The guard holds no login flag of its own: every resolution asks the
//! [`AuthState`] again, so an expiry or logout takes effect on the very
//! next navigation.

use log::debug;
use std::sync::Arc;

use super::{Access, Route};
use crate::auth::SessionManager;

/// Anything that can answer "is someone signed in right now"
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
}

impl AuthState for SessionManager {
    fn is_authenticated(&self) -> bool {
        SessionManager::is_authenticated(self)
    }
}

impl<T: AuthState + ?Sized> AuthState for Arc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

impl<T: AuthState + ?Sized> AuthState for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// Outcome of guarding a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Show the route
    Render(Route),
    /// Go elsewhere instead, replacing the history entry rather than pushing
    Redirect(Route),
}

impl Resolution {
    /// The route that ends up on screen after at most one redirect hop
    pub fn target(&self) -> Route {
        match *self {
            Resolution::Render(route) | Resolution::Redirect(route) => route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect(_))
    }
}

/// Allows, denies or redirects navigations based on the session
pub struct NavigationGuard<A> {
    auth: A,
}

impl<A: AuthState> NavigationGuard<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    /// Re-evaluated on every call
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Where signed-in users land (dashboard) and signed-out users are sent (login)
    pub fn landing(&self) -> Route {
        if self.is_authenticated() {
            Route::Dashboard
        } else {
            Route::Login
        }
    }

    /// Decide what a navigation to `path` shows
    pub fn resolve(&self, path: &str) -> Resolution {
        let authenticated = self.is_authenticated();

        let resolution = match Route::parse(path) {
            // Unmatched paths follow the current session state
            None => Resolution::Redirect(if authenticated {
                Route::Dashboard
            } else {
                Route::Login
            }),
            Some(route) => match (route.access(), authenticated) {
                (Access::Protected, false) => Resolution::Redirect(Route::Login),
                (Access::Public, true) => Resolution::Redirect(Route::Dashboard),
                (Access::Protected, true) if route == Route::Index => {
                    Resolution::Redirect(Route::Dashboard)
                }
                _ => Resolution::Render(route),
            },
        };

        debug!(
            "Resolved {} (authenticated={}) -> {:?}",
            path, authenticated, resolution
        );
        resolution
    }
}
