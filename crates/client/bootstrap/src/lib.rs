//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, collaborator selection, and runtime setup
//! (login, display configuration, past-results preload) that can be reused by
//! the terminal view or any other front-end crate.
pub mod builder;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{Credentials, RuntimeConfig};
