//! Topic-based event bus for runtime events.
//!
//! Sync transitions and session milestones are published to separate topics so
//! a renderer can redraw on standings changes without caring about login or
//! configuration traffic.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{SessionEvent, SyncEvent};
