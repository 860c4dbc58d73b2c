//! Mock authentication
//!
//! This module provides:
//! - The session manager (login, signup, refresh, logout, expiry checks)
//! - Client-side form validation for the authentication screens
//! - The error taxonomy surfaced to the UI

mod error;
mod manager;
mod validation;

pub use error::AuthError;
pub use manager::{AuthSession, SessionManager};
pub use validation::{
    ForgotPasswordForm, LoginForm, MIN_PASSWORD_LEN, SignupForm, ValidationError, is_valid_email,
};
