//! Preload of the season results the backend predicts from.
use tracing::{debug, warn};

use crate::api::PastResultsSource;
use crate::events::{Event, EventBus, SessionEvent};
use crate::state::FetchStatus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PastResultsState {
    pub got_results: bool,
    pub status: FetchStatus,
}

impl PastResultsState {
    /// Asks the backend to load past results. Skipped entirely when the user is
    /// not logged in.
    pub async fn load(
        source: &dyn PastResultsSource,
        logged_in: bool,
        event_bus: Option<&EventBus>,
    ) -> Self {
        let mut state = Self {
            got_results: false,
            status: FetchStatus::Loading,
        };

        if !logged_in {
            debug!("skipping past results, not logged in");
            state.status = FetchStatus::Idle;
        } else {
            match source.load_past_results().await {
                Ok(got_results) => {
                    state.got_results = got_results;
                    state.status = FetchStatus::Idle;
                }
                Err(err) => {
                    warn!("past results unavailable: {}", err);
                    state.status = FetchStatus::Failed;
                }
            }
        }

        if let Some(bus) = event_bus {
            bus.publish(Event::Session(SessionEvent::PastResultsLoaded {
                got_results: state.got_results,
            }));
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        answer: Result<bool, FetchError>,
    }

    #[async_trait]
    impl PastResultsSource for Counting {
        async fn load_past_results(&self) -> Result<bool, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    #[tokio::test]
    async fn not_logged_in_skips_the_backend() {
        let source = Counting {
            calls: AtomicUsize::new(0),
            answer: Ok(true),
        };

        let state = PastResultsState::load(&source, false, None).await;

        assert!(!state.got_results);
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn logged_in_uses_backend_answer() {
        let source = Counting {
            calls: AtomicUsize::new(0),
            answer: Ok(true),
        };

        let state = PastResultsState::load(&source, true, None).await;

        assert!(state.got_results);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backend_error_marks_failed() {
        let source = Counting {
            calls: AtomicUsize::new(0),
            answer: Err(FetchError::Transport("down".into())),
        };

        let state = PastResultsState::load(&source, true, None).await;

        assert!(!state.got_results);
        assert_eq!(state.status, FetchStatus::Failed);
    }
}
