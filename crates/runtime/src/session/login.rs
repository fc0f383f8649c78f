//! Login flow and the user-facing alert that accompanies it.
//!
//! The collaborator answers with a boolean or an error; both a `false` and an
//! error end in the same generic message so no credential detail leaks to the
//! view.
use std::sync::Arc;

use tracing::{info, warn};

use crate::api::AuthProvider;
use crate::events::{Event, EventBus, SessionEvent};
use crate::state::FetchStatus;

pub(crate) const FETCHING_MESSAGE: &str = "Fetching data from iRacing...";
pub(crate) const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Banner message shown on the login view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Outcome of the most recent login attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub ok: bool,
    pub status: FetchStatus,
    pub alert: Option<Alert>,
}

impl LoginState {
    /// An attempt started: forget the previous outcome.
    pub fn pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.ok = false;
        self.alert = Some(Alert::success(FETCHING_MESSAGE));
    }

    /// The collaborator answered.
    pub fn fulfilled(&mut self, accepted: bool) {
        self.status = FetchStatus::Idle;
        self.ok = accepted;
        if !accepted {
            self.alert = Some(Alert::error(INVALID_CREDENTIALS_MESSAGE));
        }
    }

    /// The collaborator failed to answer.
    pub fn rejected(&mut self) {
        self.status = FetchStatus::Failed;
        self.ok = false;
        self.alert = Some(Alert::error(INVALID_CREDENTIALS_MESSAGE));
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }
}

/// Drives login attempts against an [`AuthProvider`].
pub struct LoginSession {
    auth: Arc<dyn AuthProvider>,
    state: LoginState,
    event_bus: Option<EventBus>,
}

impl LoginSession {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            auth,
            state: LoginState::default(),
            event_bus: None,
        }
    }

    /// Publish login outcomes on the session topic.
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.ok
    }

    /// Attempts a login and returns whether it succeeded.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        self.state.pending();

        match self.auth.login(username, password).await {
            Ok(accepted) => {
                if accepted {
                    info!("login accepted");
                } else {
                    info!("login rejected");
                }
                self.state.fulfilled(accepted);
            }
            Err(err) => {
                warn!("login failed: {}", err);
                self.state.rejected();
            }
        }

        if let Some(bus) = &self.event_bus {
            bus.publish(Event::Session(SessionEvent::LoginCompleted {
                ok: self.state.ok,
            }));
        }

        self.state.ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthError;
    use async_trait::async_trait;

    struct Answer(Result<bool, AuthError>);

    #[async_trait]
    impl AuthProvider for Answer {
        async fn login(&self, _username: &str, _password: &str) -> Result<bool, AuthError> {
            self.0.clone()
        }
    }

    #[test]
    fn pending_clears_previous_success() {
        let mut state = LoginState::default();
        state.fulfilled(true);
        state.pending();

        assert!(!state.ok);
        assert_eq!(state.status, FetchStatus::Loading);
        assert_eq!(state.alert, Some(Alert::success(FETCHING_MESSAGE)));
    }

    #[tokio::test]
    async fn accepted_login_keeps_progress_alert() {
        let mut session = LoginSession::new(Arc::new(Answer(Ok(true))));

        assert!(session.login("driver@example.com", "secret").await);
        assert_eq!(session.state().status, FetchStatus::Idle);
        assert_eq!(session.state().alert, Some(Alert::success(FETCHING_MESSAGE)));
    }

    #[tokio::test]
    async fn rejection_and_error_share_the_message() {
        let mut rejected = LoginSession::new(Arc::new(Answer(Ok(false))));
        let mut failed = LoginSession::new(Arc::new(Answer(Err(AuthError::Transport(
            "timeout".into(),
        )))));

        assert!(!rejected.login("a", "b").await);
        assert!(!failed.login("a", "b").await);

        assert_eq!(rejected.state().status, FetchStatus::Idle);
        assert_eq!(failed.state().status, FetchStatus::Failed);
        assert_eq!(rejected.state().alert, failed.state().alert);
        assert_eq!(
            failed.state().alert,
            Some(Alert::error(INVALID_CREDENTIALS_MESSAGE))
        );
    }

    #[tokio::test]
    async fn publishes_outcome() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe(crate::events::Topic::Session);
        let mut session =
            LoginSession::new(Arc::new(Answer(Ok(true)))).with_event_bus(bus.clone());

        session.login("a", "b").await;

        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::Session(SessionEvent::LoginCompleted { ok: true })
        ));
    }
}
