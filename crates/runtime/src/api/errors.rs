//! Unified error types surfaced by the runtime API.
//!
//! [`FetchError`] and [`AuthError`] describe collaborator failures; they are
//! recovered at the polling/login boundary and never reach the render layer
//! beyond a status value. [`RuntimeError`] covers orchestration failures that
//! clients bubble up with consistent context.
use std::fmt;

use standings_core::SnapshotError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} collaborator not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("sync worker command channel closed")]
    CommandChannelClosed,

    #[error("sync worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("sync worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

/// Failure of a read from the standings backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network or IPC failure reaching the backend.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with something that is not a valid payload.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<SnapshotError> for FetchError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Json(source) => Self::Decode(source.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Failure of a login attempt.
///
/// Callers treat every variant like a `false` answer; the distinction only
/// shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    Rejected,

    #[error("authentication transport failure: {0}")]
    Transport(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Standings,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Standings => "standings",
        };
        write!(f, "{}", label)
    }
}
