//! Application state and core logic

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{NijouzuApi, SimulatedClient};
use crate::config::TuiConfig;
use crate::state::{AppState, BackendStatus, Form, SplashState, SubmitOutcome, View};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client (simulated until the real API contract exists)
    pub api: Arc<dyn NijouzuApi>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance against the configured backend
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let api: Arc<dyn NijouzuApi> = Arc::new(SimulatedClient::new(
            config.resolve_api_address(),
            config.submit_latency(),
        ));

        let mut app = Self::with_api(api);
        app.check_backend().await;
        Ok(app)
    }

    /// Build an App against any backend implementation (tests inject mocks)
    #[allow(clippy::field_reassign_with_default)]
    pub fn with_api(api: Arc<dyn NijouzuApi>) -> Self {
        let mut state = AppState::default();

        // Start with splash screen
        state.current_view = View::Splash;

        Self {
            state,
            api,
            quit: false,
            splash_state: Some(SplashState::new()),
        }
    }

    /// Run a backend health check and record the outcome
    pub async fn check_backend(&mut self) {
        self.state.backend = match self.api.health_check().await {
            Ok(status) => {
                tracing::info!(status = %status.status, "backend reachable");
                BackendStatus::Connected {
                    status,
                    checked_at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::warn!("backend health check failed: {err}");
                BackendStatus::Error {
                    reason: err.to_string(),
                    checked_at: Utc::now(),
                }
            }
        };
    }

    /// Update splash animation state.
    /// Returns true if animation is complete and we should transition.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Landing;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while either form has a submission in flight
    pub fn has_pending_submission(&self) -> bool {
        self.state.sign_in.submission.is_pending() || self.state.register.submission.is_pending()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => {}
            View::Landing => self.handle_landing_key(key).await,
            View::SignIn => self.handle_sign_in_key(key),
            View::Register => self.handle_register_key(key),
        }
        Ok(())
    }

    async fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => {
                self.state.status_message = None;
                self.state.current_view = View::SignIn;
            }
            KeyCode::Char('r') => {
                self.state.status_message = None;
                self.state.current_view = View::Register;
            }
            KeyCode::Char('c') => {
                self.state.backend = BackendStatus::Checking;
                self.check_backend().await;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        let pending = self.state.sign_in.submission.is_pending();
        match key.code {
            // Leaving the form discards it; refused while a submission runs
            KeyCode::Esc if !pending => {
                self.state.sign_in.reset();
                self.state.current_view = View::Landing;
            }
            KeyCode::Tab | KeyCode::Down => self.state.sign_in.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.sign_in.prev_field(),
            KeyCode::Enter => self.submit_sign_in(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.sign_in.toggle_reveal_active();
            }
            // "Remember me" stub: rendered state only, no session flow yet
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.sign_in.remember_me = !self.state.sign_in.remember_me;
            }
            KeyCode::Backspace => self.state.sign_in.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.sign_in.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        let pending = self.state.register.submission.is_pending();
        match key.code {
            KeyCode::Esc if !pending => {
                self.state.register.reset();
                self.state.current_view = View::Landing;
            }
            KeyCode::Tab | KeyCode::Down => self.state.register.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.register.prev_field(),
            KeyCode::Enter => self.submit_register(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.register.toggle_reveal_active();
            }
            KeyCode::Backspace => self.state.register.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.register.input_char(c);
            }
            _ => {}
        }
    }

    /// Submit the sign-in form: full validation first, then one episode
    fn submit_sign_in(&mut self) {
        let form = &mut self.state.sign_in;
        if form.submission.is_pending() {
            return;
        }
        if !form.validate_for_submit() {
            tracing::debug!("sign-in blocked by validation");
            return;
        }
        let api = Arc::clone(&self.api);
        let request = form.request();
        tracing::info!(email = %request.email, "sign-in submitted");
        form.submission.begin(async move { api.sign_in(request).await });
    }

    /// Submit the registration form: full validation first, then one episode
    fn submit_register(&mut self) {
        let form = &mut self.state.register;
        if form.submission.is_pending() {
            return;
        }
        if !form.validate_for_submit() {
            tracing::debug!("registration blocked by validation");
            return;
        }
        let api = Arc::clone(&self.api);
        let request = form.request();
        tracing::info!(username = %request.username, "registration submitted");
        form.submission.begin(async move { api.register(request).await });
    }

    /// Poll in-flight submissions; called every event-loop tick. Routing on
    /// success is decided here, outside the form state machine.
    pub fn poll_submissions(&mut self) {
        if let Some(outcome) = self.state.sign_in.submission.poll() {
            match outcome {
                SubmitOutcome::Succeeded(payload) => {
                    tracing::info!("sign-in succeeded");
                    self.state.sign_in.reset();
                    self.state.status_message = Some(payload.message);
                    self.state.current_view = View::Landing;
                }
                SubmitOutcome::Failed(reason) => {
                    tracing::warn!("sign-in failed: {reason}");
                }
            }
        }

        if let Some(outcome) = self.state.register.submission.poll() {
            match outcome {
                SubmitOutcome::Succeeded(_) => {
                    tracing::info!("registration succeeded");
                    self.state.register.reset();
                    self.state.status_message =
                        Some("Account created! Sign in to start learning.".to_string());
                    self.state.current_view = View::SignIn;
                }
                SubmitOutcome::Failed(reason) => {
                    tracing::warn!("registration failed: {reason}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, AuthPayload, MockNijouzuApi};
    use crate::state::SubmitState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// App on the given view with splash already dismissed
    fn app_on(view: View, api: MockNijouzuApi) -> App {
        let mut app = App::with_api(Arc::new(api));
        app.splash_state = None;
        app.state.current_view = view;
        app
    }

    async fn settle(app: &mut App) {
        for _ in 0..1000 {
            app.poll_submissions();
            if !app.has_pending_submission() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("submission did not settle");
    }

    fn fill_sign_in(app: &mut App) {
        app.state.sign_in.set_field("email", "kenji@example.com");
        app.state.sign_in.set_field("password", "Abcdef1");
    }

    fn fill_register(app: &mut App) {
        app.state.register.set_field("username", "kenji-99");
        app.state.register.set_field("email", "kenji@example.com");
        app.state.register.set_field("password", "Abcdef1");
        app.state.register.set_field("confirm_password", "Abcdef1");
    }

    #[tokio::test]
    async fn test_invalid_sign_in_never_reaches_the_api() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_sign_in().times(0);
        let mut app = app_on(View::SignIn, mock);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(!app.state.sign_in.errors.is_empty());
        assert_eq!(*app.state.sign_in.submission.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_sign_in_success_routes_to_landing() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_sign_in().times(1).returning(|request| {
            Ok(AuthPayload {
                message: format!("Welcome back, {}!", request.email),
            })
        });
        let mut app = app_on(View::SignIn, mock);
        fill_sign_in(&mut app);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.has_pending_submission());
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Landing);
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Welcome back, kenji@example.com!")
        );
        // Form discarded after success
        assert_eq!(app.state.sign_in.email.value, "");
        assert_eq!(*app.state.sign_in.submission.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn test_sign_in_failure_keeps_form_and_values() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_sign_in()
            .times(1)
            .returning(|_| Err(ApiError::Rejected("Invalid credentials".to_string())));
        let mut app = app_on(View::SignIn, mock);
        fill_sign_in(&mut app);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::SignIn);
        assert_eq!(
            app.state.sign_in.submission.state().failure(),
            Some("Invalid credentials")
        );
        assert_eq!(app.state.sign_in.email.value, "kenji@example.com");
    }

    #[tokio::test]
    async fn test_repeat_submit_while_pending_is_ignored() {
        let mut mock = MockNijouzuApi::new();
        // Exactly one call even though Enter is pressed twice
        mock.expect_sign_in().times(1).returning(|_| {
            Ok(AuthPayload {
                message: "ok".to_string(),
            })
        });
        let mut app = app_on(View::SignIn, mock);
        fill_sign_in(&mut app);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.sign_in.email.value, "kenji@example.com");
        settle(&mut app).await;
    }

    #[tokio::test]
    async fn test_register_success_routes_to_sign_in() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_register().times(1).returning(|request| {
            Ok(AuthPayload {
                message: format!("Account created for {}", request.username),
            })
        });
        let mut app = app_on(View::Register, mock);
        fill_register(&mut app);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::SignIn);
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Account created! Sign in to start learning.")
        );
        assert_eq!(app.state.register.username.value, "");
    }

    #[tokio::test]
    async fn test_register_failure_surfaces_reason() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_register().times(1).returning(|_| {
            Err(ApiError::Rejected(
                "Username \"admin\" is already taken".to_string(),
            ))
        });
        let mut app = app_on(View::Register, mock);
        fill_register(&mut app);
        app.state.register.set_field("username", "admin");

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Register);
        assert_eq!(
            app.state.register.submission.state().failure(),
            Some("Username \"admin\" is already taken")
        );
    }

    #[tokio::test]
    async fn test_typing_flows_into_active_field_with_live_validation() {
        let mut app = app_on(View::Register, MockNijouzuApi::new());

        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('b'))).await.unwrap();

        assert_eq!(app.state.register.username.value, "ab");
        assert!(app.state.register.errors.get("username").is_some());

        app.handle_key(key(KeyCode::Char('c'))).await.unwrap();
        assert_eq!(app.state.register.errors.get("username"), None);
    }

    #[tokio::test]
    async fn test_tab_moves_focus_and_esc_returns_to_landing() {
        let mut app = app_on(View::SignIn, MockNijouzuApi::new());

        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(app.state.sign_in.active_field(), 1);

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.state.current_view, View::Landing);
        assert_eq!(app.state.sign_in.active_field(), 0);
    }

    #[tokio::test]
    async fn test_ctrl_r_reveals_active_secret_field() {
        let mut app = app_on(View::SignIn, MockNijouzuApi::new());
        app.handle_key(key(KeyCode::Tab)).await.unwrap(); // focus password

        app.handle_key(ctrl('r')).await.unwrap();
        assert!(app.state.sign_in.password.revealed);
        // And the key never lands in the field value
        assert_eq!(app.state.sign_in.password.value, "");
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_remember_me_stub() {
        let mut app = app_on(View::SignIn, MockNijouzuApi::new());
        app.handle_key(ctrl('t')).await.unwrap();
        assert!(app.state.sign_in.remember_me);
        app.handle_key(ctrl('t')).await.unwrap();
        assert!(!app.state.sign_in.remember_me);
    }

    #[tokio::test]
    async fn test_landing_keys_navigate_and_quit() {
        let mut mock = MockNijouzuApi::new();
        mock.expect_health_check().returning(|| {
            Ok(crate::api::ApiStatus {
                message: "Welcome to Nijouzu API".to_string(),
                status: "running".to_string(),
            })
        });
        let mut app = app_on(View::Landing, mock);

        app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
        assert_eq!(app.state.current_view, View::SignIn);

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Register);

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        app.handle_key(key(KeyCode::Char('c'))).await.unwrap();
        assert!(app.state.backend.is_connected());

        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_any_key_skips_splash() {
        let mut app = App::with_api(Arc::new(MockNijouzuApi::new()));
        assert!(app.in_splash());

        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        app.update_splash(24);

        assert!(!app.in_splash());
        assert_eq!(app.state.current_view, View::Landing);
    }
}
