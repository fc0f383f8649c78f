//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{SessionEvent, SyncEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Sync state transitions (status, snapshot, selection)
    Sync,
    /// Login, configuration and past-results milestones
    Session,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone)]
pub enum Event {
    Sync(SyncEvent),
    Session(SessionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Sync(_) => Topic::Sync,
            Event::Session(_) => Topic::Session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow subscribers lag.
#[derive(Clone)]
pub struct EventBus {
    sync: broadcast::Sender<Event>,
    session: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            sync: broadcast::channel(capacity).0,
            session: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Sync => &self.sync,
            Topic::Session => &self.session,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchStatus;

    #[tokio::test]
    async fn routes_events_by_topic() {
        let bus = EventBus::with_capacity(4);
        let mut sync_rx = bus.subscribe(Topic::Sync);
        let mut session_rx = bus.subscribe(Topic::Session);

        bus.publish(Event::Sync(SyncEvent::StatusChanged {
            status: FetchStatus::Loading,
        }));
        bus.publish(Event::Session(SessionEvent::LoginCompleted { ok: true }));

        assert!(matches!(
            sync_rx.recv().await.unwrap(),
            Event::Sync(SyncEvent::StatusChanged {
                status: FetchStatus::Loading
            })
        ));
        assert!(matches!(
            session_rx.recv().await.unwrap(),
            Event::Session(SessionEvent::LoginCompleted { ok: true })
        ));
        assert!(sync_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Session(SessionEvent::PastResultsLoaded { got_results: false }));
    }
}
