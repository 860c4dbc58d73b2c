//! Root application component for Finboard

use dashboard::{
    Access, DashboardConfig, DeviceClass, DocumentAttributes, DocumentTheme, History,
    KeyValueStore, NAVIGATION_ITEMS, NavigationGuard, Palette, Recovery, ResizeNotice, Route,
    SessionManager, SidebarState, ThemeState, document_title,
};
use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, Theme, ThemeMode};
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;

use crate::components::SidebarItem;
use crate::input::{
    CloseSidebar, GoBack, SignOut, ToggleDarkMode, ToggleGlassMode, ToggleSidebar,
};
use crate::views::{AuthView, AuthViewEvent, PageView};

/// How often an idle window re-checks session expiry
const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(30);

const SIDEBAR_WIDTH: f32 = 240.;

/// Root application state
pub struct FinboardApp {
    manager: Arc<SessionManager>,
    guard: NavigationGuard<Arc<SessionManager>>,
    history: History,
    theme: ThemeState,
    /// Theme marker the session writes to; mirrored into gpui-component
    document: Arc<DocumentAttributes>,
    /// Last theme pushed to gpui-component
    applied_theme: Option<DocumentTheme>,
    sidebar: SidebarState,
    mobile_breakpoint: f32,
    auth_view: Entity<AuthView>,
    page_view: Entity<PageView>,
    /// Unexpected failure shown on the recovery screen instead of the page
    fault: Option<String>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl FinboardApp {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        config: DashboardConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mobile_breakpoint = config.mobile_breakpoint;
        let resize_delay = config.resize_delay();

        let manager = Arc::new(SessionManager::new(store.clone(), config));
        let guard = NavigationGuard::new(manager.clone());

        let document = Arc::new(DocumentAttributes::new());
        let theme = ThemeState::init(store, document.clone());

        let width = f32::from(window.viewport_size().width);
        let sidebar = SidebarState::new(
            DeviceClass::from_width(width, mobile_breakpoint),
            resize_delay,
        );

        let auth_view = cx.new(|cx| AuthView::new(manager.clone(), window, cx));
        let page_view = cx.new(|_| PageView::new(manager.clone()));
        let _subscriptions = vec![cx.subscribe(&auth_view, Self::on_auth_event)];

        let mut app = Self {
            manager,
            guard,
            history: History::new(),
            theme,
            document,
            applied_theme: None,
            sidebar,
            mobile_breakpoint,
            auth_view,
            page_view,
            fault: None,
            focus_handle: cx.focus_handle(),
            _subscriptions,
        };

        app.sync_document_theme(cx);
        app.navigate("/", cx);
        app.watch_session(cx);
        app
    }

    /// Push a navigation to `path`; the guard decides what actually shows
    pub fn navigate(&mut self, path: &str, cx: &mut Context<Self>) {
        let route = self.history.navigate(&self.guard, path);
        info!("Navigated to {} -> {}", path, route);
        self.show(route, cx);
    }

    fn go_back(&mut self, cx: &mut Context<Self>) {
        if let Some(route) = self.history.back(&self.guard) {
            debug!("Back to {}", route);
            self.show(route, cx);
        }
    }

    fn logout(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.manager.logout() {
            self.fail("Failed to sign out", e.into(), cx);
        }
        self.revalidate(cx);
    }

    /// Replace the page with the recovery screen
    fn fail(&mut self, context: &str, e: anyhow::Error, cx: &mut Context<Self>) {
        error!("{}: {:#}", context, e);
        self.fault = Some(format!("{}: {}", context, e));
        cx.notify();
    }

    fn recover(&mut self, action: Recovery, cx: &mut Context<Self>) {
        self.fault = None;
        let route = self.history.recover(&self.guard, action);
        info!("Recovered via {:?} -> {}", action, route);
        self.show(route, cx);
    }

    /// Re-guard the current entry against the session as it is now
    fn revalidate(&mut self, cx: &mut Context<Self>) {
        let before = self.history.current();
        let after = self.history.revalidate(&self.guard);
        if after != before {
            if let Some(route) = after {
                info!("Session changed, now showing {}", route);
                self.show(route, cx);
            }
        }
    }

    fn show(&mut self, route: Route, cx: &mut Context<Self>) {
        if route.access() == Access::Public {
            self.auth_view.update(cx, |view, cx| view.set_mode(route, cx));
        } else {
            self.page_view.update(cx, |view, cx| view.show(route, cx));
        }
        cx.notify();
    }

    /// Poll for session expiry while the window is open
    fn watch_session(&mut self, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(SESSION_CHECK_INTERVAL)
                    .await;

                let alive = cx
                    .update(|cx| this.update(cx, |app, cx| app.revalidate(cx)).is_ok())
                    .unwrap_or(false);

                if !alive {
                    break;
                }
            }
        })
        .detach();
    }

    fn on_auth_event(
        &mut self,
        _: Entity<AuthView>,
        event: &AuthViewEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            AuthViewEvent::SignedIn(session) => {
                info!("Welcome, {}", session.user.name);
                self.navigate(Route::Dashboard.path(), cx);
            }
            AuthViewEvent::Navigate(route) => self.navigate(route.path(), cx),
        }
    }

    fn toggle_sidebar(&mut self, cx: &mut Context<Self>) {
        if let Some(notice) = self.sidebar.toggle() {
            self.schedule_resize(notice, cx);
        }
        cx.notify();
    }

    /// Tell the page to re-measure once the drawer transition has finished
    fn schedule_resize(&mut self, notice: ResizeNotice, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(notice.delay).await;

            cx.update(|cx| {
                this.update(cx, |app, cx| {
                    // A later toggle supersedes this one
                    if notice.is_current(&app.sidebar) {
                        app.page_view
                            .update(cx, |view, cx| view.relayout(notice.epoch, cx));
                    }
                })
            })
            .ok();
        })
        .detach();
    }

    fn toggle_dark(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.theme.toggle_dark() {
            self.fail("Failed to save dark mode", e, cx);
        }
        self.sync_document_theme(cx);
        cx.notify();
    }

    fn toggle_glass(&mut self, cx: &mut Context<Self>) {
        if let Err(e) = self.theme.toggle_glass() {
            self.fail("Failed to save glass mode", e, cx);
        }
        cx.notify();
    }

    /// Mirror the document theme marker into gpui-component's theme
    fn sync_document_theme(&mut self, cx: &mut Context<Self>) {
        let theme = self.document.theme();
        if theme == self.applied_theme {
            return;
        }
        let mode = match theme {
            Some(DocumentTheme::Dark) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };
        Theme::change(mode, None, cx);
        self.applied_theme = theme;
    }

    fn render_sidebar(&self, current: Route, palette: Palette, cx: &mut Context<Self>) -> Div {
        let user = self.manager.current_user();
        let initials = user.as_ref().map(|u| u.initials()).unwrap_or_default();
        let name = user.map(|u| u.name).unwrap_or_default();

        div()
            .flex()
            .flex_col()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(rgba(palette.surface))
            .border_r_1()
            .border_color(rgba(palette.border))
            // Branding
            .child(
                div().pt_8().pb_4().px_3().child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .text_color(rgba(palette.foreground))
                        .child("Finboard"),
                ),
            )
            // Navigation
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap_1()
                    .px_2()
                    .py_1()
                    .children(NAVIGATION_ITEMS.iter().map(|item| {
                        let item = *item;
                        let is_active = item.is_active(current);

                        div()
                            .id(ElementId::Name(format!("nav-{}", item.id).into()))
                            .on_click(cx.listener(move |app, _event, _window, cx| {
                                app.sidebar.close();
                                app.navigate(item.route.path(), cx);
                            }))
                            .child(SidebarItem::new(item, is_active, palette))
                    })),
            )
            // Profile footer
            .child(
                div()
                    .px_3()
                    .py_2()
                    .border_t_1()
                    .border_color(rgba(palette.border))
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .size_8()
                            .rounded_full()
                            .bg(rgba(palette.accent))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_xs()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(0xffffff))
                            .child(initials),
                    )
                    .child(
                        div()
                            .flex_1()
                            .overflow_hidden()
                            .text_sm()
                            .text_color(rgba(palette.foreground))
                            .text_ellipsis()
                            .child(name),
                    ),
            )
    }

    fn render_header(
        &self,
        palette: Palette,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let dark = self.theme.is_dark();
        let glass = self.theme.is_glass();

        div()
            .w_full()
            .px_4()
            .py_2()
            .bg(rgba(palette.surface))
            .border_b_1()
            .border_color(rgba(palette.border))
            .flex()
            .items_center()
            .justify_between()
            .child(
                Button::new("toggle-sidebar")
                    .label("Menu")
                    .small()
                    .ghost()
                    .on_click(cx.listener(|app, _event, _window, cx| {
                        app.toggle_sidebar(cx);
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::new("toggle-glass")
                            .label(if glass { "Glass" } else { "Flat" })
                            .small()
                            .ghost()
                            .on_click(cx.listener(|app, _event, _window, cx| {
                                app.toggle_glass(cx);
                            })),
                    )
                    .child(
                        Button::new("toggle-dark")
                            .label(if dark { "Dark" } else { "Light" })
                            .small()
                            .ghost()
                            .on_click(cx.listener(|app, _event, _window, cx| {
                                app.toggle_dark(cx);
                            })),
                    )
                    .child(
                        Button::new("sign-out")
                            .label("Sign out")
                            .small()
                            .ghost()
                            .on_click(cx.listener(|app, _event, _window, cx| {
                                app.logout(cx);
                            })),
                    ),
            )
    }

    fn render_main(&self, current: Route, palette: Palette, cx: &mut Context<Self>) -> Div {
        let header = self.render_header(palette, cx);
        let sidebar_open = self.sidebar.is_open();
        let is_mobile = self.sidebar.is_mobile();

        let content = div()
            .flex()
            .flex_col()
            .flex_1()
            .h_full()
            .overflow_hidden()
            .child(header)
            .child(div().flex_1().overflow_hidden().child(self.page_view.clone()));

        let root = div().relative().flex().flex_row().size_full();

        if !sidebar_open {
            return root.child(content);
        }

        let sidebar = self.render_sidebar(current, palette, cx);
        if is_mobile {
            // Overlay drawer above the content with a dismissing backdrop
            root.child(content)
                .child(
                    div()
                        .id("sidebar-backdrop")
                        .absolute()
                        .inset_0()
                        .bg(hsla(0., 0., 0., 0.5))
                        .on_click(cx.listener(|app, _event, _window, cx| {
                            app.sidebar.close();
                            cx.notify();
                        })),
                )
                .child(div().absolute().top_0().left_0().h_full().child(sidebar))
        } else {
            root.child(sidebar).child(content)
        }
    }

    fn render_recovery(&self, message: String, palette: Palette, cx: &mut Context<Self>) -> Div {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgba(palette.background))
            .child(
                div()
                    .w(px(420.))
                    .p_6()
                    .rounded_lg()
                    .border_1()
                    .border_color(rgba(palette.border))
                    .bg(rgba(palette.surface))
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Something went wrong"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgba(palette.muted_foreground))
                            .child(message),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_2()
                            .child(
                                Button::new("recover-reload")
                                    .label("Reload")
                                    .primary()
                                    .on_click(cx.listener(|app, _event, _window, cx| {
                                        app.recover(Recovery::Reload, cx);
                                    })),
                            )
                            .child(
                                Button::new("recover-dashboard")
                                    .label("Return to dashboard")
                                    .ghost()
                                    .on_click(cx.listener(|app, _event, _window, cx| {
                                        app.recover(Recovery::ReturnToDashboard, cx);
                                    })),
                            ),
                    ),
            )
    }

    fn render_public(&self, palette: Palette) -> Div {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgba(palette.background))
            .child(self.auth_view.clone())
    }
}

impl FinboardApp {
    fn handle_toggle_sidebar(&mut self, _: &ToggleSidebar, _: &mut Window, cx: &mut Context<Self>) {
        self.toggle_sidebar(cx);
    }

    fn handle_close_sidebar(&mut self, _: &CloseSidebar, _: &mut Window, cx: &mut Context<Self>) {
        self.sidebar.close();
        cx.notify();
    }

    fn handle_toggle_dark(&mut self, _: &ToggleDarkMode, _: &mut Window, cx: &mut Context<Self>) {
        self.toggle_dark(cx);
    }

    fn handle_toggle_glass(
        &mut self,
        _: &ToggleGlassMode,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.toggle_glass(cx);
    }

    fn handle_go_back(&mut self, _: &GoBack, _: &mut Window, cx: &mut Context<Self>) {
        self.go_back(cx);
    }

    fn handle_sign_out(&mut self, _: &SignOut, _: &mut Window, cx: &mut Context<Self>) {
        if self.manager.is_authenticated() {
            self.logout(cx);
        }
    }
}

impl Render for FinboardApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = f32::from(window.viewport_size().width);
        self.sidebar.set_viewport_width(width, self.mobile_breakpoint);

        // The session may have lapsed since the last frame
        self.revalidate(cx);
        let current = self.history.current().unwrap_or(Route::Login);
        window.set_window_title(&document_title(current));

        let palette = self.theme.palette();
        let body = if let Some(message) = self.fault.clone() {
            self.render_recovery(message, palette, cx)
        } else if current.access() == Access::Public {
            self.render_public(palette)
        } else {
            self.render_main(current, palette, cx)
        };

        div()
            .track_focus(&self.focus_handle)
            .key_context("FinboardApp")
            .on_action(cx.listener(Self::handle_toggle_sidebar))
            .on_action(cx.listener(Self::handle_close_sidebar))
            .on_action(cx.listener(Self::handle_toggle_dark))
            .on_action(cx.listener(Self::handle_toggle_glass))
            .on_action(cx.listener(Self::handle_go_back))
            .on_action(cx.listener(Self::handle_sign_out))
            .size_full()
            .bg(rgba(palette.background))
            .text_color(rgba(palette.foreground))
            .child(body)
    }
}
