//! Worker tasks that back the runtime orchestration.
//!
//! The sync worker is the only writer of the live [`crate::SyncState`]; the
//! polling driver feeds it on a fixed cadence.

mod poller;
mod sync;

pub(crate) use poller::PollingDriver;
pub(crate) use sync::{Command, SyncWorker};
