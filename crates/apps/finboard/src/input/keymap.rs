//! Keyboard shortcut definitions

use gpui::KeyBinding;

use super::actions::*;

/// Returns all keybindings to register with GPUI
pub fn bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("cmd-b", ToggleSidebar, Some("FinboardApp")),
        KeyBinding::new("escape", CloseSidebar, Some("FinboardApp")),
        KeyBinding::new("cmd-shift-d", ToggleDarkMode, Some("FinboardApp")),
        KeyBinding::new("cmd-shift-g", ToggleGlassMode, Some("FinboardApp")),
        KeyBinding::new("cmd-[", GoBack, Some("FinboardApp")),
        KeyBinding::new("cmd-shift-q", SignOut, Some("FinboardApp")),
    ]
}
