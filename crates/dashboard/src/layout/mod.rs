//! Responsive layout state
//!
//! Device classification from the viewport width and the sidebar drawer
//! state machine built on top of it.

mod device;
mod sidebar;

pub use device::DeviceClass;
pub use sidebar::{ResizeNotice, SidebarState};
