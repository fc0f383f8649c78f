//! Asynchronous contracts for the external standings backend.
//!
//! The backend owns telemetry capture, authentication against the racing
//! service and the prediction math. The runtime only consumes its answers
//! through these traits, so it can run against the backend's snapshot file,
//! canned fixtures, or test doubles.
use async_trait::async_trait;
use standings_core::PredictedStandings;

use super::errors::{AuthError, FetchError};
use crate::session::DisplayConfig;

/// Source of the latest predicted standings.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// Fetches the most recent snapshot published by the backend.
    ///
    /// No timeout is applied by the runtime; a call that never returns only
    /// delays its own tick.
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError>;
}

/// Credential check against the racing service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Returns whether the credentials were accepted.
    async fn login(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// Display configuration, read once at startup.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn fetch_configuration(&self) -> Result<DisplayConfig, FetchError>;
}

/// Preload of the season's earlier results the predictions are based on.
#[async_trait]
pub trait PastResultsSource: Send + Sync {
    /// Returns true when results were obtained.
    async fn load_past_results(&self) -> Result<bool, FetchError>;
}
