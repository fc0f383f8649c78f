//! Runtime orchestration for the live standings overlay.
//!
//! This crate wires the standings collaborator, the polling timer and the
//! single-writer sync state into a cohesive runtime API. Consumers embed
//! [`Runtime`] to start and stop polling and interact with the live state
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`state`] holds the pure sync state machine
//! - [`events`] provides the topic-based event bus
//! - [`session`] covers the one-shot flows around polling (login, display
//!   configuration, past results)
//! - [`sources`] ships collaborator implementations (backend file, fixtures)
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod session;
pub mod sources;
pub mod state;

mod workers;

pub use api::{
    AuthError, AuthProvider, ConfigSource, FetchError, PastResultsSource, ProviderKind, Result,
    RuntimeError, RuntimeHandle, StandingsSource,
};
pub use events::{Event, EventBus, SessionEvent, SyncEvent, Topic};
pub use runtime::{DEFAULT_POLL_INTERVAL, Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::{
    Alert, AlertKind, ConfigState, DEFAULT_SHOW_TOP_N, DisplayConfig, LoginSession, LoginState,
    PastResultsState,
};
pub use sources::{
    FileConfigSource, FileStandingsSource, FixtureStandingsSource, StaticAuthProvider,
    StaticConfigSource, StaticPastResults,
};
pub use state::{FetchStatus, SyncState};
