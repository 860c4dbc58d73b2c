//! Reusable UI components for Finboard

mod sidebar;

pub use sidebar::SidebarItem;
