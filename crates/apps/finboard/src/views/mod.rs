//! GPUI views for Finboard

mod auth;
mod page;

pub use auth::{AuthView, AuthViewEvent};
pub use page::PageView;
