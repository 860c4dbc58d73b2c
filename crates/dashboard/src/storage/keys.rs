//! Namespaced keys for persisted values

/// Every key the dashboard persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Session tokens (`AuthTokens`)
    AuthTokens,
    /// Signed-in user record (`User`)
    UserData,
    /// Dark mode flag
    DarkMode,
    /// Glass mode flag
    GlassMode,
}

impl StorageKey {
    /// The key as written to the backing store
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::AuthTokens => "auth_tokens",
            StorageKey::UserData => "user_data",
            StorageKey::DarkMode => "isDarkMode",
            StorageKey::GlassMode => "isGlassMode",
        }
    }

    pub const ALL: [StorageKey; 4] = [
        StorageKey::AuthTokens,
        StorageKey::UserData,
        StorageKey::DarkMode,
        StorageKey::GlassMode,
    ];
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let names: HashSet<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), StorageKey::ALL.len());
    }

    #[test]
    fn test_key_names_match_persisted_layout() {
        assert_eq!(StorageKey::AuthTokens.to_string(), "auth_tokens");
        assert_eq!(StorageKey::UserData.to_string(), "user_data");
        assert_eq!(StorageKey::DarkMode.to_string(), "isDarkMode");
        assert_eq!(StorageKey::GlassMode.to_string(), "isGlassMode");
    }
}
