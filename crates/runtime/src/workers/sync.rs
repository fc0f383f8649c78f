//! Sync worker that owns the authoritative [`SyncState`].
//!
//! Every mutation arrives as a [`Command`] on one FIFO queue and is applied in
//! arrival order. Poll results therefore win by completion order, not by the
//! order their fetches were issued: an old poll that completes late overwrites
//! a newer snapshot until the next tick. That staleness is accepted and not
//! suppressed.
//!
//! Poll transitions carry the [`DispatchEpoch`] of the driver run that produced
//! them. Once a run is detached, late results from its fetches are dropped.

use standings_core::{CarClassId, PredictedStandings};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::api::FetchError;
use crate::events::{Event, EventBus, SyncEvent};
use crate::state::SyncState;

/// Identifies one start/stop run of the polling driver.
pub type DispatchEpoch = u64;

/// Commands that can be sent to the sync worker
pub enum Command {
    /// Accept poll transitions tagged with `epoch` from now on.
    Attach {
        epoch: DispatchEpoch,
        reply: oneshot::Sender<()>,
    },
    /// Stop accepting poll transitions tagged with `epoch`.
    Detach {
        epoch: DispatchEpoch,
        reply: oneshot::Sender<()>,
    },
    FetchPending {
        epoch: DispatchEpoch,
    },
    FetchFulfilled {
        epoch: DispatchEpoch,
        snapshot: Box<PredictedStandings>,
    },
    FetchFailed {
        epoch: DispatchEpoch,
        error: FetchError,
    },
    CycleSelectedClass {
        reply: oneshot::Sender<CarClassId>,
    },
    /// Query the current sync state (read-only clone).
    QueryState {
        reply: oneshot::Sender<SyncState>,
    },
    Shutdown,
}

/// Background task applying sync transitions.
pub struct SyncWorker {
    state: SyncState,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    attached: Option<DispatchEpoch>,
}

impl SyncWorker {
    pub fn new(command_rx: mpsc::Receiver<Command>, event_bus: EventBus) -> Self {
        Self {
            state: SyncState::new(),
            command_rx,
            event_bus,
            attached: None,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        info!("SyncWorker started");

        while let Some(cmd) = self.command_rx.recv().await {
            if matches!(cmd, Command::Shutdown) {
                break;
            }
            self.handle_command(cmd);
        }

        info!("SyncWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Attach { epoch, reply } => {
                debug!("attaching polling run {}", epoch);
                self.attached = Some(epoch);
                if reply.send(()).is_err() {
                    debug!("Attach reply channel closed (caller dropped)");
                }
            }
            Command::Detach { epoch, reply } => {
                if self.attached == Some(epoch) {
                    debug!("detaching polling run {}", epoch);
                    self.attached = None;
                }
                if reply.send(()).is_err() {
                    debug!("Detach reply channel closed (caller dropped)");
                }
            }
            Command::FetchPending { epoch } => {
                if self.accepts(epoch) {
                    self.state.fetch_pending();
                    self.publish_status();
                }
            }
            Command::FetchFulfilled { epoch, snapshot } => {
                if self.accepts(epoch) {
                    self.state.fetch_fulfilled(*snapshot);
                    debug!(
                        "snapshot applied: track={:?} classes={}",
                        self.state.latest().track_name,
                        self.state.latest().class_ids.len()
                    );
                    self.event_bus
                        .publish(Event::Sync(SyncEvent::SnapshotApplied {
                            snapshot: self.state.latest_shared(),
                            selected_class_id: self.state.selected_class_id(),
                        }));
                }
            }
            Command::FetchFailed { epoch, error } => {
                if self.accepts(epoch) {
                    warn!("standings poll failed: {}", error);
                    self.state.fetch_failed();
                    self.publish_status();
                }
            }
            Command::CycleSelectedClass { reply } => {
                let selected = self.state.cycle_selected_class();
                debug!("selected car class {}", selected);
                self.event_bus
                    .publish(Event::Sync(SyncEvent::SelectionChanged {
                        selected_class_id: selected,
                    }));
                if reply.send(selected).is_err() {
                    debug!("CycleSelectedClass reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    fn accepts(&self, epoch: DispatchEpoch) -> bool {
        let accepted = self.attached == Some(epoch);
        if !accepted {
            debug!("dropping transition from detached polling run {}", epoch);
        }
        accepted
    }

    fn publish_status(&self) {
        self.event_bus.publish(Event::Sync(SyncEvent::StatusChanged {
            status: self.state.status(),
        }));
    }
}
