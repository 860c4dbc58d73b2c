//! Session manager backed by a key-value store
//!
//! Operations are synchronous and sleep for the configured latency so the
//! caller decides where they run (a background executor in the desktop
//! shell, the test thread in tests). Nothing about the session is cached:
//! every query re-reads the store and re-checks expiry against the clock.

use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

use super::AuthError;
use crate::config::DashboardConfig;
use crate::models::{AuthTokens, User};
use crate::storage::{KeyValueStore, StorageKey, load_json, remove, save_json};

/// Result of a successful login or signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: User,
    pub tokens: AuthTokens,
}

/// Owns authentication state derived from the store
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    config: DashboardConfig,
}

impl SessionManager {
    /// Create a manager over `store` using `config` for credentials and timing
    pub fn new(store: Arc<dyn KeyValueStore>, config: DashboardConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Sign in with the demo credential
    ///
    /// On mismatch nothing is written to the store.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        simulate_latency(self.config.latency());

        if email != self.config.demo_email || password != self.config.demo_password {
            info!("Rejected sign-in for {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = AuthTokens::issue(Utc::now(), self.config.session_ttl());
        let user = self.config.demo_user.clone();
        self.persist_session(&tokens, &user)?;

        info!("Signed in as {} (expires {})", user.email, tokens.expires_at);
        Ok(AuthSession { user, tokens })
    }

    /// Create an account and sign in
    ///
    /// Always succeeds; this is a single-user demo so no uniqueness check is
    /// made. The user id is the current epoch-millisecond timestamp.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<AuthSession, AuthError> {
        simulate_latency(self.config.latency());

        let now = Utc::now();
        let user = User::new(now.timestamp_millis().to_string(), email, name);
        let tokens = AuthTokens::issue(now, self.config.session_ttl());
        self.persist_session(&tokens, &user)?;

        info!("Created account {} for {}", user.id, user.email);
        Ok(AuthSession { user, tokens })
    }

    /// Remove the session and user record; safe to call when signed out
    pub fn logout(&self) -> Result<(), AuthError> {
        remove(self.store.as_ref(), StorageKey::AuthTokens)?;
        remove(self.store.as_ref(), StorageKey::UserData)?;
        info!("Signed out");
        Ok(())
    }

    /// A session exists and has not expired
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some_and(|tokens| tokens.is_valid())
    }

    /// The stored user, hidden once the session has expired
    ///
    /// An expired session leaves `user_data` in the store; it is only
    /// removed by the next logout or overwritten by the next login.
    pub fn current_user(&self) -> Option<User> {
        if !self.is_authenticated() {
            return None;
        }
        match load_json(self.store.as_ref(), StorageKey::UserData) {
            Ok(user) => user,
            Err(e) => {
                warn!("Ignoring unreadable user record: {:#}", e);
                None
            }
        }
    }

    /// Stored tokens regardless of expiry
    ///
    /// Read or decode failures are logged and reported as no session.
    pub fn session(&self) -> Option<AuthTokens> {
        match load_json(self.store.as_ref(), StorageKey::AuthTokens) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Ignoring unreadable session: {:#}", e);
                None
            }
        }
    }

    /// Issue a new access token and extend expiry, keeping the refresh token
    ///
    /// Only requires a stored session; an expired one can still be refreshed.
    pub fn refresh_session(&self) -> Result<AuthTokens, AuthError> {
        let current: AuthTokens =
            load_json(self.store.as_ref(), StorageKey::AuthTokens)?.ok_or(AuthError::NoSession)?;

        simulate_latency(self.config.refresh_latency());

        let renewed = current.renewed(Utc::now(), self.config.session_ttl());
        save_json(self.store.as_ref(), StorageKey::AuthTokens, &renewed)?;

        debug!("Refreshed session, now expires {}", renewed.expires_at);
        Ok(renewed)
    }

    /// Request a password reset email (simulated, nothing is sent)
    pub fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        simulate_latency(self.config.latency());
        info!("Password reset email sent to {}", email);
        Ok(())
    }

    fn persist_session(&self, tokens: &AuthTokens, user: &User) -> Result<(), AuthError> {
        save_json(self.store.as_ref(), StorageKey::AuthTokens, tokens)?;
        save_json(self.store.as_ref(), StorageKey::UserData, user)?;
        Ok(())
    }
}

fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
