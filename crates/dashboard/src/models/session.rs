//! Session token bundle and expiry rules

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Tokens proving a user is signed in, persisted under `auth_tokens`
///
/// `expires_at` is stored as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl AuthTokens {
    /// Issue a fresh token pair valid for `ttl` from `now`
    ///
    /// Expiry is kept at millisecond precision so the tokens compare equal
    /// to what the store reads back.
    pub fn issue(now: DateTime<Utc>, ttl: Duration) -> Self {
        let now = now.trunc_subsecs(3);
        let stamp = now.timestamp_millis();
        Self {
            access_token: format!("mock_access_token_{}", stamp),
            refresh_token: format!("mock_refresh_token_{}", stamp),
            expires_at: now + ttl,
        }
    }

    /// Rotate the access token and extend expiry, keeping the refresh token
    pub fn renewed(&self, now: DateTime<Utc>, ttl: Duration) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            access_token: format!("mock_access_token_{}", now.timestamp_millis()),
            refresh_token: self.refresh_token.clone(),
            expires_at: now + ttl,
        }
    }

    /// Valid iff expiry is strictly after `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Valid against the current wall clock
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Time left before expiry, or `None` once expired
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.is_valid_at(now).then(|| self.expires_at - now)
    }
}
