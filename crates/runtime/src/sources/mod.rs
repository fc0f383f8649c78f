//! Collaborator implementations shipped with the runtime.
//!
//! - [`FileStandingsSource`] / [`FileConfigSource`] read the JSON the backend
//!   writes to disk on every telemetry tick
//! - [`FixtureStandingsSource`] and the `Static*` types serve canned answers
//!   for offline runs and tests
mod auth;
mod file;
mod fixture;

pub use auth::StaticAuthProvider;
pub use file::{FileConfigSource, FileStandingsSource};
pub use fixture::{FixtureStandingsSource, StaticConfigSource, StaticPastResults};
