//! User model stored alongside the session

use serde::{Deserialize, Serialize};

/// The signed-in user as persisted under `user_data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier ("1" for the demo profile, a millisecond timestamp for signups)
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a user without an avatar
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Set the avatar URL
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Initials for avatar placeholders ("Carla Sanford" -> "CS")
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string())
        } else {
            initials
        }
    }
}
