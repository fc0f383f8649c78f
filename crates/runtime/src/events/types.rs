//! Event payloads published by the runtime.
use std::sync::Arc;

use standings_core::{CarClassId, PredictedStandings};

use crate::session::DisplayConfig;
use crate::state::FetchStatus;

/// Changes to the live sync state, in the order they were applied.
#[derive(Clone, Debug)]
pub enum SyncEvent {
    /// A poll was dispatched or failed. The snapshot did not change.
    StatusChanged { status: FetchStatus },

    /// A poll completed and its snapshot replaced the previous one.
    ///
    /// `selected_class_id` reflects lazy resolution on the first snapshot.
    SnapshotApplied {
        snapshot: Arc<PredictedStandings>,
        selected_class_id: CarClassId,
    },

    /// The viewer cycled to another class.
    SelectionChanged { selected_class_id: CarClassId },
}

/// One-shot flows around polling.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    LoginCompleted { ok: bool },
    ConfigLoaded { config: DisplayConfig, from_fallback: bool },
    PastResultsLoaded { got_results: bool },
}
