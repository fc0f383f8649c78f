//! One-shot flows that run around the polling loop.
//!
//! Each flow follows the same pending/fulfilled/rejected lifecycle as the
//! standings poll and reduces collaborator errors to a [`FetchStatus`]
//! (`crate::FetchStatus`) plus a plain outcome value.

mod config;
mod login;
mod past_results;

pub use config::{ConfigState, DEFAULT_SHOW_TOP_N, DisplayConfig};
pub use login::{Alert, AlertKind, LoginSession, LoginState};
pub use past_results::PastResultsState;
