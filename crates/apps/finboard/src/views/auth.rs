//! Sign-in, sign-up and password reset screens

use dashboard::{
    AuthError, AuthSession, ForgotPasswordForm, LoginForm, Route, SessionManager, SignupForm,
    ValidationError,
};
use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{ActiveTheme, Disableable, Sizable};
use log::{error, info};
use std::sync::Arc;

/// Events emitted by the AuthView
pub enum AuthViewEvent {
    /// Login or signup succeeded
    SignedIn(AuthSession),
    /// User followed a link to another auth screen
    Navigate(Route),
}

impl EventEmitter<AuthViewEvent> for AuthView {}

/// A validated submission, ready to hand to the session manager
enum Request {
    Login(LoginForm),
    Signup(SignupForm),
    ForgotPassword(ForgotPasswordForm),
}

enum Outcome {
    SignedIn(AuthSession),
    ResetSent(String),
}

impl Request {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Request::Login(form) => form.validate(),
            Request::Signup(form) => form.validate(),
            Request::ForgotPassword(form) => form.validate(),
        }
    }

    /// Blocks for the simulated latency; run on the background executor
    fn run(self, manager: &SessionManager) -> Result<Outcome, AuthError> {
        match self {
            Request::Login(form) => manager
                .login(&form.email, &form.password)
                .map(Outcome::SignedIn),
            Request::Signup(form) => manager
                .signup(&form.name, &form.email, &form.password)
                .map(Outcome::SignedIn),
            Request::ForgotPassword(form) => {
                manager.forgot_password(&form.email)?;
                Ok(Outcome::ResetSent(form.email))
            }
        }
    }
}

/// Form screens for the public routes
pub struct AuthView {
    manager: Arc<SessionManager>,
    mode: Route,
    name: Entity<InputState>,
    email: Entity<InputState>,
    password: Entity<InputState>,
    confirm_password: Entity<InputState>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl AuthView {
    pub fn new(manager: Arc<SessionManager>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| InputState::new(window, cx).placeholder("Full name"));
        let email = cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let password = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Password")
                .masked(true)
        });
        let confirm_password = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Confirm password")
                .masked(true)
        });

        let _subscriptions = [&name, &email, &password, &confirm_password]
            .into_iter()
            .map(|input| cx.subscribe(input, Self::on_input_event))
            .collect();

        Self {
            manager,
            mode: Route::Login,
            name,
            email,
            password,
            confirm_password,
            loading: false,
            error: None,
            notice: None,
            _subscriptions,
        }
    }

    /// Switch to another public screen, dropping any message from the last one
    pub fn set_mode(&mut self, mode: Route, cx: &mut Context<Self>) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.error = None;
        self.notice = None;
        cx.notify();
    }

    fn on_input_event(
        &mut self,
        _: Entity<InputState>,
        event: &InputEvent,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::PressEnter { .. } = event {
            self.submit(cx);
        }
    }

    /// Field contents with surrounding whitespace removed
    fn text(&self, input: &Entity<InputState>, cx: &App) -> String {
        input.read(cx).text().to_string().trim().to_string()
    }

    /// Passwords are taken verbatim
    fn secret(&self, input: &Entity<InputState>, cx: &App) -> String {
        input.read(cx).text().to_string()
    }

    fn request(&self, cx: &App) -> Request {
        match self.mode {
            Route::Signup => Request::Signup(SignupForm {
                name: self.text(&self.name, cx),
                email: self.text(&self.email, cx),
                password: self.secret(&self.password, cx),
                confirm_password: self.secret(&self.confirm_password, cx),
            }),
            Route::ForgotPassword => Request::ForgotPassword(ForgotPasswordForm {
                email: self.text(&self.email, cx),
            }),
            _ => Request::Login(LoginForm {
                email: self.text(&self.email, cx),
                password: self.secret(&self.password, cx),
            }),
        }
    }

    /// Validate the form and run it against the session manager
    fn submit(&mut self, cx: &mut Context<Self>) {
        // Ignore resubmits while a request is in flight
        if self.loading {
            return;
        }

        self.notice = None;
        let request = self.request(cx);
        if let Err(e) = request.validate() {
            self.error = Some(e.to_string());
            cx.notify();
            return;
        }

        self.error = None;
        self.loading = true;
        cx.notify();

        let manager = self.manager.clone();
        let background = cx.background_executor().clone();
        cx.spawn(async move |this, cx| {
            let result = background.spawn(async move { request.run(&manager) }).await;

            cx.update(|cx| {
                this.update(cx, |view, cx| {
                    view.loading = false;
                    match result {
                        Ok(Outcome::SignedIn(session)) => {
                            cx.emit(AuthViewEvent::SignedIn(session));
                        }
                        Ok(Outcome::ResetSent(email)) => {
                            info!("Reset link requested for {}", email);
                            view.notice =
                                Some(format!("Password reset instructions sent to {}", email));
                        }
                        Err(e) => {
                            if !e.is_user_error() {
                                error!("Authentication request failed: {:#}", e);
                            }
                            view.error = Some(e.to_string());
                        }
                    }
                    cx.notify();
                })
            })
            .ok();
        })
        .detach();
    }

    fn heading(&self) -> (&'static str, &'static str) {
        match self.mode {
            Route::Signup => ("Create account", "Start tracking your finances"),
            Route::ForgotPassword => (
                "Reset password",
                "We'll email you a link to choose a new password",
            ),
            _ => ("Welcome back", "Sign in to your dashboard"),
        }
    }

    fn submit_label(&self) -> &'static str {
        match (self.mode, self.loading) {
            (Route::Signup, false) => "Create account",
            (Route::Signup, true) => "Creating account...",
            (Route::ForgotPassword, false) => "Send reset link",
            (Route::ForgotPassword, true) => "Sending...",
            (_, false) => "Sign in",
            (_, true) => "Signing in...",
        }
    }

    fn render_field(
        &self,
        label: &'static str,
        input: &Entity<InputState>,
        cx: &Context<Self>,
    ) -> impl IntoElement + use<> {
        let theme = cx.theme();

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground)
                    .child(label),
            )
            .child(Input::new(input).disabled(self.loading))
    }

    fn render_link(
        &self,
        id: &'static str,
        label: &'static str,
        target: Route,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        Button::new(id)
            .label(label)
            .ghost()
            .small()
            .disabled(self.loading)
            .on_click(cx.listener(move |_view, _event, _window, cx| {
                cx.emit(AuthViewEvent::Navigate(target));
            }))
    }
}

impl Render for AuthView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let bg = theme.background;
        let fg = theme.foreground;
        let muted_fg = theme.muted_foreground;
        let border = theme.border;
        let danger = theme.danger;
        let success = theme.success;

        let (title, subtitle) = self.heading();
        let mode = self.mode;
        let demo_hint = format!(
            "Demo account: {} / {}",
            self.manager.config().demo_email,
            self.manager.config().demo_password
        );

        let name_field = self.render_field("Name", &self.name, cx);
        let email_field = self.render_field("Email", &self.email, cx);
        let password_field = self.render_field("Password", &self.password, cx);
        let confirm_field = self.render_field("Confirm password", &self.confirm_password, cx);

        let links = match mode {
            Route::Signup => div().flex().justify_center().child(self.render_link(
                "to-login",
                "Already have an account? Sign in",
                Route::Login,
                cx,
            )),
            Route::ForgotPassword => div().flex().justify_center().child(self.render_link(
                "back-to-login",
                "Back to sign in",
                Route::Login,
                cx,
            )),
            _ => div()
                .flex()
                .justify_between()
                .child(self.render_link(
                    "to-forgot",
                    "Forgot password?",
                    Route::ForgotPassword,
                    cx,
                ))
                .child(self.render_link("to-signup", "Create account", Route::Signup, cx)),
        };

        div()
            .w(px(380.))
            .p_6()
            .rounded_lg()
            .border_1()
            .border_color(border)
            .bg(bg)
            .shadow_lg()
            .flex()
            .flex_col()
            .gap_4()
            // Header
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(fg)
                            .child(title),
                    )
                    .child(div().text_sm().text_color(muted_fg).child(subtitle)),
            )
            .when(mode == Route::Signup, |el| el.child(name_field))
            .child(email_field)
            .when(mode != Route::ForgotPassword, |el| el.child(password_field))
            .when(mode == Route::Signup, |el| el.child(confirm_field))
            .when_some(self.error.clone(), |el, message| {
                el.child(div().text_sm().text_color(danger).child(message))
            })
            .when_some(self.notice.clone(), |el, message| {
                el.child(div().text_sm().text_color(success).child(message))
            })
            .child(
                Button::new("auth-submit")
                    .primary()
                    .w_full()
                    .label(self.submit_label())
                    .loading(self.loading)
                    .on_click(cx.listener(|view, _event, _window, cx| {
                        view.submit(cx);
                    })),
            )
            .child(links)
            .when(mode == Route::Login, |el| {
                el.child(
                    div()
                        .pt_2()
                        .border_t_1()
                        .border_color(border)
                        .text_xs()
                        .text_color(muted_fg)
                        .child(demo_hint),
                )
            })
    }
}
