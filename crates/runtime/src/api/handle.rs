//! Cloneable façade for reading and steering the live standings.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! querying the sync state, cycling the selected class, and streaming events
//! from specific topics. It is the context object views receive instead of a
//! global store.
use standings_core::CarClassId;
use tokio::sync::{broadcast, mpsc, oneshot};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::state::SyncState;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Query the current sync state (read-only snapshot)
    pub async fn query_state(&self) -> Result<SyncState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Advance the selection to the next car class and return it
    pub async fn cycle_selected_class(&self) -> Result<CarClassId> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::CycleSelectedClass { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use overlay_runtime::Topic;
    ///
    /// let mut sync_rx = handle.subscribe(Topic::Sync);
    /// while let Ok(event) = sync_rx.recv().await {
    ///     // Redraw the standings
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
