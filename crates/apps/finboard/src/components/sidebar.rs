//! Sidebar navigation entry

use dashboard::{NavItem, Palette};
use gpui::prelude::*;
use gpui::*;

/// A single link in the sidebar navigation
#[derive(IntoElement)]
pub struct SidebarItem {
    item: NavItem,
    is_active: bool,
    palette: Palette,
}

impl SidebarItem {
    pub fn new(item: NavItem, is_active: bool, palette: Palette) -> Self {
        Self {
            item,
            is_active,
            palette,
        }
    }
}

impl RenderOnce for SidebarItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.palette;

        let bg_color: Hsla = if self.is_active {
            rgba(palette.accent).into()
        } else {
            transparent_black()
        };

        let text_color = if self.is_active {
            rgb(0xffffff)
        } else {
            rgba(palette.muted_foreground)
        };

        div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .cursor_pointer()
            .hover(move |style| style.bg(rgba(palette.border)))
            .flex()
            .items_center()
            .child(
                div()
                    .text_sm()
                    .text_color(text_color)
                    .font_weight(if self.is_active {
                        FontWeight::MEDIUM
                    } else {
                        FontWeight::NORMAL
                    })
                    .child(self.item.label),
            )
    }
}
