//! Sync state machine for the live standings.
//!
//! [`SyncState`] is the single source of truth for what the overlay shows:
//! the fetch status, the last snapshot that arrived, and the car class the
//! viewer is looking at. Its fields are only writable through the transition
//! methods below; the runtime owns the one live instance inside its sync
//! worker and hands out clones to readers.
//!
//! ```text
//! Idle ──pending──▶ Loading ──fulfilled──▶ Idle
//!                      │
//!                      └────failed──────▶ Failed ──pending──▶ Loading
//! ```
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use standings_core::{CarClassId, ClassStanding, PredictedStandings, next_class_or_self};

/// Lifecycle of an asynchronous read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Live standings plus the view selection derived from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncState {
    status: FetchStatus,
    /// Last fulfilled snapshot. Kept through failures so stale data stays
    /// visible.
    latest: Arc<PredictedStandings>,
    selected_class_id: CarClassId,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn latest(&self) -> &PredictedStandings {
        &self.latest
    }

    /// Shared pointer to the latest snapshot, for publishing without a deep copy.
    pub fn latest_shared(&self) -> Arc<PredictedStandings> {
        Arc::clone(&self.latest)
    }

    pub fn selected_class_id(&self) -> CarClassId {
        self.selected_class_id
    }

    /// Leaderboard of the selected class, if the latest snapshot has one.
    pub fn selected_standing(&self) -> Option<&ClassStanding> {
        self.latest.class(self.selected_class_id)
    }

    /// A poll was dispatched. The previous snapshot stays in place.
    pub fn fetch_pending(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// A poll completed. Resolves the selection on the first usable snapshot.
    pub fn fetch_fulfilled(&mut self, snapshot: PredictedStandings) {
        self.status = FetchStatus::Idle;

        if !self.selected_class_id.is_known() {
            self.selected_class_id = if snapshot.self_class_id.is_known() {
                snapshot.self_class_id
            } else {
                snapshot
                    .class_ids
                    .first()
                    .copied()
                    .unwrap_or(CarClassId::UNKNOWN)
            };
        }

        self.latest = Arc::new(snapshot);
    }

    /// A poll failed. The previous snapshot stays in place.
    pub fn fetch_failed(&mut self) {
        self.status = FetchStatus::Failed;
    }

    /// Advances the selection to the next class of the latest snapshot.
    pub fn cycle_selected_class(&mut self) -> CarClassId {
        self.selected_class_id = next_class_or_self(
            &self.latest.class_ids,
            self.selected_class_id,
            self.latest.self_class_id,
        );
        self.selected_class_id
    }
}
