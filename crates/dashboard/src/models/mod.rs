//! Domain models for the session layer

mod session;
mod user;

pub use session::AuthTokens;
pub use user::User;
