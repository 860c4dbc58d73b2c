//! Protected page content

use chrono::{DateTime, Local, Utc};
use dashboard::{AuthTokens, Route, SessionManager, User};
use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Sizable};
use log::{debug, error};
use std::sync::Arc;

/// Summary card shown on the overview pages
struct Metric {
    label: &'static str,
    value: &'static str,
    change: &'static str,
}

const OVERVIEW_METRICS: [Metric; 4] = [
    Metric {
        label: "Total Balance",
        value: "$48,320.55",
        change: "+4.2% this month",
    },
    Metric {
        label: "Income",
        value: "$12,480.00",
        change: "+1.8% this month",
    },
    Metric {
        label: "Expenses",
        value: "$7,912.34",
        change: "-3.1% this month",
    },
    Metric {
        label: "Savings Rate",
        value: "36.6%",
        change: "+2.4 pts",
    },
];

/// Content area for the route on screen
pub struct PageView {
    manager: Arc<SessionManager>,
    route: Route,
    user: Option<User>,
    tokens: Option<AuthTokens>,
    refreshing: bool,
    refresh_error: Option<String>,
    /// Last sidebar epoch this view laid out for
    layout_epoch: u64,
}

impl PageView {
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self {
            manager,
            route: Route::Dashboard,
            user: None,
            tokens: None,
            refreshing: false,
            refresh_error: None,
            layout_epoch: 0,
        }
    }

    /// Show `route`, re-reading the signed-in user and session
    pub fn show(&mut self, route: Route, cx: &mut Context<Self>) {
        self.route = route;
        self.user = self.manager.current_user();
        self.tokens = self.manager.session();
        self.refresh_error = None;
        cx.notify();
    }

    /// Re-measure after the sidebar finished resizing
    pub fn relayout(&mut self, epoch: u64, cx: &mut Context<Self>) {
        if epoch == self.layout_epoch {
            return;
        }
        debug!("Page relayout for sidebar epoch {}", epoch);
        self.layout_epoch = epoch;
        cx.notify();
    }

    fn refresh_session(&mut self, cx: &mut Context<Self>) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;
        self.refresh_error = None;
        cx.notify();

        let manager = self.manager.clone();
        let background = cx.background_executor().clone();
        cx.spawn(async move |this, cx| {
            let result = background
                .spawn(async move { manager.refresh_session() })
                .await;

            cx.update(|cx| {
                this.update(cx, |view, cx| {
                    view.refreshing = false;
                    match result {
                        Ok(tokens) => view.tokens = Some(tokens),
                        Err(e) => {
                            error!("Session refresh failed: {:#}", e);
                            view.refresh_error = Some(e.to_string());
                        }
                    }
                    cx.notify();
                })
            })
            .ok();
        })
        .detach();
    }

    fn subtitle(&self) -> String {
        match self.route {
            Route::Dashboard => match &self.user {
                Some(user) => format!("Welcome back, {}", user.name),
                None => "Welcome back".to_string(),
            },
            Route::Reports => "Monthly statements and exports".to_string(),
            Route::ReportsPerformance => "Portfolio performance over time".to_string(),
            Route::Analytics => "Spending patterns and trends".to_string(),
            Route::AnalyticsDetailed => "Category breakdown by month".to_string(),
            Route::Profile => "Account and session details".to_string(),
            _ => String::new(),
        }
    }

    fn render_metrics(&self, cx: &Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let bg = theme.background;
        let border = theme.border;
        let fg = theme.foreground;
        let muted_fg = theme.muted_foreground;

        div()
            .flex()
            .flex_wrap()
            .gap_4()
            .children(OVERVIEW_METRICS.iter().map(|metric| {
                div()
                    .min_w(px(200.))
                    .flex_1()
                    .p_4()
                    .rounded_lg()
                    .border_1()
                    .border_color(border)
                    .bg(bg)
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(div().text_sm().text_color(muted_fg).child(metric.label))
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(fg)
                            .child(metric.value),
                    )
                    .child(div().text_xs().text_color(muted_fg).child(metric.change))
            }))
    }

    fn render_profile(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let bg = theme.background;
        let border = theme.border;
        let fg = theme.foreground;
        let muted_fg = theme.muted_foreground;
        let danger = theme.danger;

        let rows: Vec<(&'static str, String)> = match &self.user {
            Some(user) => vec![
                ("Name", user.name.clone()),
                ("Email", user.email.clone()),
                ("User ID", user.id.clone()),
            ],
            None => vec![("Account", "Not signed in".to_string())],
        };

        let expiry = self
            .tokens
            .as_ref()
            .map(|tokens| format_expiry(tokens, Utc::now()))
            .unwrap_or_else(|| "No active session".to_string());

        div()
            .max_w(px(560.))
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(border)
            .bg(bg)
            .flex()
            .flex_col()
            .gap_3()
            .children(rows.into_iter().map(|(label, value)| {
                div()
                    .flex()
                    .justify_between()
                    .child(div().text_sm().text_color(muted_fg).child(label))
                    .child(div().text_sm().text_color(fg).child(value))
            }))
            .child(
                div()
                    .pt_3()
                    .border_t_1()
                    .border_color(border)
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().text_sm().text_color(muted_fg).child(expiry))
                    .child(
                        Button::new("refresh-session")
                            .label(if self.refreshing {
                                "Refreshing..."
                            } else {
                                "Refresh session"
                            })
                            .small()
                            .ghost()
                            .loading(self.refreshing)
                            .on_click(cx.listener(|view, _event, _window, cx| {
                                view.refresh_session(cx);
                            })),
                    ),
            )
            .when_some(self.refresh_error.clone(), |el, message| {
                el.child(div().text_sm().text_color(danger).child(message))
            })
    }
}

/// Describe when a session lapses ("Session expires in 23h 59m")
fn format_expiry(tokens: &AuthTokens, now: DateTime<Utc>) -> String {
    match tokens.remaining(now) {
        Some(left) if left.num_hours() > 0 => format!(
            "Session expires in {}h {}m",
            left.num_hours(),
            left.num_minutes() % 60
        ),
        Some(left) if left.num_minutes() > 0 => {
            format!("Session expires in {}m", left.num_minutes())
        }
        Some(_) => "Session expires in under a minute".to_string(),
        None => {
            let local: DateTime<Local> = tokens.expires_at.into();
            format!("Session expired {}", local.format("%b %d at %H:%M"))
        }
    }
}

impl Render for PageView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let fg = theme.foreground;
        let muted_fg = theme.muted_foreground;

        let title = self.route.page_title().unwrap_or_default();
        let subtitle = self.subtitle();
        let is_profile = self.route == Route::Profile;

        let body = if is_profile {
            self.render_profile(cx).into_any_element()
        } else {
            self.render_metrics(cx).into_any_element()
        };

        div()
            .id("page-content")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(fg)
                            .child(title),
                    )
                    .child(div().text_sm().text_color(muted_fg).child(subtitle)),
            )
            .child(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[::core::prelude::v1::test]
    fn test_format_expiry() {
        let now = Utc::now();
        let tokens = AuthTokens::issue(now, Duration::hours(24));
        assert_eq!(format_expiry(&tokens, now), "Session expires in 24h 0m");

        let short = AuthTokens::issue(now, Duration::minutes(5));
        assert_eq!(format_expiry(&short, now), "Session expires in 5m");

        let lapsed = AuthTokens::issue(now - Duration::hours(2), Duration::hours(1));
        assert!(format_expiry(&lapsed, now).starts_with("Session expired"));
    }
}
