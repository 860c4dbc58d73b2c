//! Client-side checks run before any session request is issued

/// Minimum accepted password length for signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field failed validation; `Display` is the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Check an address has the shape `local@domain.tld`
///
/// Accepts exactly one `@`, no whitespace, a non-empty local part, and a
/// domain of at least two dot-separated labels, none of them empty.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Sign-in form
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(())
    }
}

/// Account creation form
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks run in display order; the first failure wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Name"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Password reset request form
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}
