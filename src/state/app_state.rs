//! Application state definitions

use chrono::{DateTime, Utc};

use crate::api::ApiStatus;
use crate::state::{RegisterForm, SignInForm};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Landing,
    SignIn,
    Register,
}

/// Last completed backend check, shown on the landing screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// A check is running (or none has completed yet)
    #[default]
    Checking,
    Connected {
        status: ApiStatus,
        checked_at: DateTime<Utc>,
    },
    Error {
        reason: String,
        checked_at: DateTime<Utc>,
    },
}

impl BackendStatus {
    #[allow(dead_code)]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}

/// Top-level mutable state owned by the App
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub backend: BackendStatus,
    pub sign_in: SignInForm,
    pub register: RegisterForm,
    /// Transient notice shown in the status bar (success messages etc.)
    pub status_message: Option<String>,
}
