//! Predicted-standings model and the pure view-state helpers built on it.
//!
//! `standings-core` defines the snapshot contract published by the standings
//! backend and the side-effect free operations a renderer needs on top of it:
//! cycling through car classes with [`selector`] and turning competitor
//! entries into renderable rows with [`rows`]. The runtime owns when a
//! snapshot changes; this crate only describes what one looks like.
pub mod ids;
pub mod rows;
pub mod selector;
pub mod snapshot;

pub use ids::{CarClassId, CustId};
pub use rows::{
    CarNumber, ChangeDirection, ChangeIndicator, RenderRow, RowEmphasis, RowKey, build_rows,
};
pub use selector::{next_class, next_class_or_self};
pub use snapshot::{ClassStanding, PredictedStanding, PredictedStandings, SnapshotError};
