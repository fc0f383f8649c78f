//! Stateful view model owned by the event loop.
use std::sync::Arc;

use overlay_runtime::{
    DEFAULT_SHOW_TOP_N, Event, FetchStatus, SessionEvent, SyncEvent, SyncState,
};
use standings_core::{CarClassId, PredictedStandings, build_rows};

use super::frame::{ClassTab, Footer, StandingsBody, StandingsView, StatusBadge};
use crate::event::EventImpact;

/// Presentation state mirrored from the runtime.
///
/// Stale data stays on screen while a poll is in flight and after a poll
/// fails; only the badge changes. The placeholder is shown until the first
/// snapshot arrives.
#[derive(Clone, Debug)]
pub struct StandingsViewModel {
    status: FetchStatus,
    snapshot: Arc<PredictedStandings>,
    received: bool,
    selected_class_id: CarClassId,
    top_n: i32,
    /// Set when the frontend configuration pins the row count.
    top_n_pinned: bool,
}

impl Default for StandingsViewModel {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            snapshot: Arc::default(),
            received: false,
            selected_class_id: CarClassId::UNKNOWN,
            top_n: DEFAULT_SHOW_TOP_N,
            top_n_pinned: false,
        }
    }
}

impl StandingsViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the view model from a state queried after subscribing.
    pub fn from_state(state: &SyncState) -> Self {
        Self {
            status: state.status(),
            snapshot: state.latest_shared(),
            received: !state.latest().is_empty(),
            selected_class_id: state.selected_class_id(),
            ..Self::default()
        }
    }

    /// Rows per class from the fetched display configuration.
    /// Replaces the mirrored data with `state`, keeping the row count and
    /// whether it is pinned.
    pub fn resync(&mut self, state: &SyncState) {
        *self = Self {
            top_n: self.top_n,
            top_n_pinned: self.top_n_pinned,
            ..Self::from_state(state)
        };
    }

    pub fn set_top_n(&mut self, top_n: i32) {
        if !self.top_n_pinned {
            self.top_n = top_n;
        }
    }

    /// Rows per class that later configuration loads cannot change.
    pub fn pin_top_n(&mut self, top_n: i32) {
        self.top_n = top_n;
        self.top_n_pinned = true;
    }

    pub fn top_n(&self) -> i32 {
        self.top_n
    }

    pub fn selected_class_id(&self) -> CarClassId {
        self.selected_class_id
    }

    pub fn apply(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Sync(SyncEvent::StatusChanged { status }) => {
                if self.status == *status {
                    return EventImpact::none();
                }
                self.status = *status;
            }
            Event::Sync(SyncEvent::SnapshotApplied {
                snapshot,
                selected_class_id,
            }) => {
                self.status = FetchStatus::Idle;
                self.snapshot = Arc::clone(snapshot);
                self.received = true;
                self.selected_class_id = *selected_class_id;
            }
            Event::Sync(SyncEvent::SelectionChanged { selected_class_id }) => {
                if self.selected_class_id == *selected_class_id {
                    return EventImpact::none();
                }
                self.selected_class_id = *selected_class_id;
            }
            Event::Session(SessionEvent::ConfigLoaded { config, .. }) => {
                let before = self.top_n;
                self.set_top_n(config.show_top_n);
                if before == self.top_n {
                    return EventImpact::none();
                }
            }
            Event::Session(_) => return EventImpact::none(),
        }

        EventImpact::redraw()
    }

    pub fn view(&self) -> StandingsView {
        let snapshot = &self.snapshot;

        let classes = snapshot
            .class_ids
            .iter()
            .map(|id| ClassTab {
                class_id: *id,
                name: snapshot
                    .class(*id)
                    .map(|standing| standing.class_name.clone())
                    .unwrap_or_else(|| id.to_string()),
                selected: *id == self.selected_class_id,
            })
            .collect();

        let body = if !self.received {
            StandingsBody::Waiting
        } else {
            match snapshot.class(self.selected_class_id) {
                Some(standing) => StandingsBody::Table {
                    rows: build_rows(self.selected_class_id, &standing.items, self.top_n),
                    footer: Footer::new(standing, &snapshot.track_name),
                },
                None => StandingsBody::NoClass,
            }
        };

        StandingsView {
            status_line: snapshot.status_label.clone(),
            badge: StatusBadge::from(self.status),
            classes,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_runtime::DisplayConfig;
    use standings_core::{ClassStanding, CustId, PredictedStanding};

    fn snapshot() -> Arc<PredictedStandings> {
        let items = (1..=4)
            .map(|position| PredictedStanding {
                cust_id: CustId(position as u64 * 100),
                driver_name: format!("Driver {position}"),
                car_number: if position == 2 {
                    String::new()
                } else {
                    position.to_string()
                },
                is_driving: true,
                predicted_position: position,
                ..Default::default()
            })
            .collect();

        let standing = ClassStanding {
            class_id: CarClassId(4029),
            class_name: "GT3".into(),
            strength_of_field: 2034,
            class_leader_laps_complete: 23,
            items,
        };

        Arc::new(PredictedStandings {
            status_label: "Race".into(),
            track_name: "Spa-Francorchamps".into(),
            self_class_id: CarClassId(4029),
            class_ids: vec![CarClassId(4029), CarClassId(4030)],
            classes: [(standing.class_id, standing)].into_iter().collect(),
            ..Default::default()
        })
    }

    fn applied(model: &mut StandingsViewModel) {
        model.apply(&Event::Sync(SyncEvent::SnapshotApplied {
            snapshot: snapshot(),
            selected_class_id: CarClassId(4029),
        }));
    }

    fn status(model: &mut StandingsViewModel, status: FetchStatus) -> EventImpact {
        model.apply(&Event::Sync(SyncEvent::StatusChanged { status }))
    }

    #[test]
    fn placeholder_until_first_snapshot() {
        let mut model = StandingsViewModel::new();
        status(&mut model, FetchStatus::Loading);

        let view = model.view();
        assert_eq!(view.body, StandingsBody::Waiting);
        assert_eq!(view.badge, StatusBadge::Refreshing);

        status(&mut model, FetchStatus::Failed);
        assert_eq!(model.view().body, StandingsBody::Waiting);
    }

    #[test]
    fn stale_rows_stay_visible_while_loading_and_failed() {
        let mut model = StandingsViewModel::new();
        applied(&mut model);
        let fresh = model.view().body;

        status(&mut model, FetchStatus::Loading);
        assert_eq!(model.view().body, fresh);
        assert_eq!(model.view().badge, StatusBadge::Refreshing);

        status(&mut model, FetchStatus::Failed);
        assert_eq!(model.view().body, fresh);
        assert_eq!(model.view().badge, StatusBadge::Stale);
    }

    #[test]
    fn table_has_footer_and_truncated_rows() {
        let mut model = StandingsViewModel::new();
        model.set_top_n(3);
        applied(&mut model);

        let StandingsBody::Table { rows, footer } = model.view().body else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(crate::view_model::row_cells(&rows[1])[1], "#---");
        assert_eq!(footer.class_name, "GT3");
        assert_eq!(footer.sof_label(), "SOF:2034");
        assert_eq!(footer.laps_label(), "Laps:23");
        assert_eq!(footer.track_name, "Spa-Francorchamps");
    }

    #[test]
    fn selecting_a_class_without_standings_shows_no_class() {
        let mut model = StandingsViewModel::new();
        applied(&mut model);

        let impact = model.apply(&Event::Sync(SyncEvent::SelectionChanged {
            selected_class_id: CarClassId(4030),
        }));

        assert!(impact.requires_redraw);
        let view = model.view();
        assert_eq!(view.body, StandingsBody::NoClass);
        assert!(view.classes[1].selected);
        assert_eq!(view.classes[1].name, "4030");
    }

    #[test]
    fn pinned_top_n_ignores_fetched_config() {
        let mut model = StandingsViewModel::new();
        model.pin_top_n(2);

        let impact = model.apply(&Event::Session(SessionEvent::ConfigLoaded {
            config: DisplayConfig { show_top_n: 15 },
            from_fallback: false,
        }));

        assert!(!impact.requires_redraw);
        assert_eq!(model.top_n(), 2);
    }

    #[test]
    fn resync_keeps_pinned_top_n() {
        let mut model = StandingsViewModel::new();
        model.pin_top_n(2);

        let mut state = SyncState::new();
        state.fetch_fulfilled((*snapshot()).clone());
        model.resync(&state);

        assert_eq!(model.selected_class_id(), CarClassId(4029));
        assert!(matches!(model.view().body, StandingsBody::Table { .. }));

        model.apply(&Event::Session(SessionEvent::ConfigLoaded {
            config: DisplayConfig { show_top_n: 15 },
            from_fallback: false,
        }));
        assert_eq!(model.top_n(), 2);
    }

    #[test]
    fn repeated_status_does_not_redraw() {
        let mut model = StandingsViewModel::new();
        assert!(status(&mut model, FetchStatus::Loading).requires_redraw);
        assert!(!status(&mut model, FetchStatus::Loading).requires_redraw);
    }
}
