//! Errors surfaced by authentication operations

use super::ValidationError;

/// Failure of a session operation, shown to the user as an inline alert
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Email/password did not match the accepted credential
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Refresh requested with no stored session
    #[error("No refresh token available")]
    NoSession,

    /// A form failed client-side validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store could not be read or written
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl AuthError {
    /// Whether the user can fix this by editing the form
    pub fn is_user_error(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::NoSession.to_string(), "No refresh token available");
        assert_eq!(
            AuthError::from(ValidationError::PasswordMismatch).to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_storage_error_keeps_context() {
        let err = AuthError::from(anyhow::anyhow!("Failed to write config file: /tmp/x"));
        assert!(err.to_string().contains("/tmp/x"));
        assert!(!err.is_user_error());
    }
}
