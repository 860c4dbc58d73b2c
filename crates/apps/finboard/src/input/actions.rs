//! GPUI action definitions for keyboard shortcuts

use gpui::actions;

// Layout actions
actions!(
    finboard,
    [
        ToggleSidebar, // Cmd-B - collapse/expand sidebar (open/close drawer on mobile)
        CloseSidebar,  // Escape - close mobile drawer
    ]
);

// Appearance actions
actions!(
    finboard,
    [
        ToggleDarkMode,  // Cmd-Shift-D
        ToggleGlassMode, // Cmd-Shift-G
    ]
);

// Navigation actions
actions!(
    finboard,
    [
        GoBack,  // Cmd-[
        SignOut, // Cmd-Shift-Q
    ]
);
