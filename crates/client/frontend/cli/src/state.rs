//! Terminal-only UI state.
use overlay_runtime::{Alert, LoginState};

/// State the runtime does not track: the login banner.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub alert: Option<Alert>,
}

impl AppState {
    /// Starts with the banner left by the login attempt, if any.
    pub fn from_login(login: &LoginState) -> Self {
        Self {
            alert: login.alert.clone(),
        }
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }
}
