//! Browser-like navigation history
//!
//! Navigations push an entry; guard redirects replace the entry instead,
//! so a redirected location never stays on the stack and going back can
//! never bounce into a redirect loop.

use log::warn;

use super::{AuthState, NavigationGuard, Resolution, Route};

/// Redirect hops allowed before giving up on a navigation
const MAX_REDIRECTS: usize = 4;

/// Ways out of the recovery screen shown after an unexpected failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Re-guard and redraw the current entry
    Reload,
    /// Push the dashboard (which sends signed-out users to login)
    ReturnToDashboard,
}

/// Stack of visited routes, most recent last
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route on screen, if anything has been navigated to yet
    pub fn current(&self) -> Option<Route> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Push a navigation to `path`, following guard redirects
    pub fn navigate<A: AuthState>(&mut self, guard: &NavigationGuard<A>, path: &str) -> Route {
        let route = settle(guard, path);
        self.entries.push(route);
        route
    }

    /// Replace the current entry with `path`, following guard redirects
    pub fn replace<A: AuthState>(&mut self, guard: &NavigationGuard<A>, path: &str) -> Route {
        let route = settle(guard, path);
        match self.entries.last_mut() {
            Some(last) => *last = route,
            None => self.entries.push(route),
        }
        route
    }

    /// Pop the current entry and re-guard the one below it
    ///
    /// Returns `None` when there is nowhere to go back to.
    pub fn back<A: AuthState>(&mut self, guard: &NavigationGuard<A>) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        let previous = self.current()?;
        Some(self.replace(guard, previous.path()))
    }

    /// Leave the recovery screen the way the user chose
    pub fn recover<A: AuthState>(
        &mut self,
        guard: &NavigationGuard<A>,
        action: Recovery,
    ) -> Route {
        match action {
            Recovery::Reload => match self.current() {
                Some(current) => self.replace(guard, current.path()),
                None => self.navigate(guard, Route::Index.path()),
            },
            Recovery::ReturnToDashboard => self.navigate(guard, Route::Dashboard.path()),
        }
    }

    /// Re-guard the current entry (after login/logout)
    pub fn revalidate<A: AuthState>(&mut self, guard: &NavigationGuard<A>) -> Option<Route> {
        let current = self.current()?;
        Some(self.replace(guard, current.path()))
    }
}

/// Resolve `path`, following redirects until a route renders
fn settle<A: AuthState>(guard: &NavigationGuard<A>, path: &str) -> Route {
    let mut resolution = guard.resolve(path);
    for _ in 0..MAX_REDIRECTS {
        match resolution {
            Resolution::Render(route) => return route,
            Resolution::Redirect(route) => resolution = guard.resolve(route.path()),
        }
    }
    warn!("Too many redirects resolving {}, landing on {:?}", path, resolution);
    resolution.target()
}
