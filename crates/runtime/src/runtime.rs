//! High-level runtime orchestrator.
//!
//! The runtime owns the sync worker and the polling driver, wires up the
//! command/event channels, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::api::{ProviderKind, Result, RuntimeError, RuntimeHandle, StandingsSource};
use crate::events::EventBus;
use crate::workers::{Command, PollingDriver, SyncWorker};

/// Period between two standings polls unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub poll_interval: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that keeps the live standings in sync.
///
/// Design: Runtime owns the workers and the polling lifecycle.
/// [`RuntimeHandle`] provides a cloneable façade for views.
pub struct Runtime {
    handle: RuntimeHandle,
    command_tx: mpsc::Sender<Command>,
    driver: PollingDriver,
    sync_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Event bus shared with session flows that publish outside the sync worker
    pub fn event_bus(&self) -> EventBus {
        self.handle.event_bus().clone()
    }

    /// Start polling the standings collaborator. Idempotent.
    pub async fn start_polling(&mut self) -> Result<()> {
        self.driver.start().await
    }

    /// Stop polling. Late results of in-flight fetches are discarded.
    pub async fn stop_polling(&mut self) -> Result<()> {
        self.driver.stop().await
    }

    pub fn is_polling(&self) -> bool {
        self.driver.is_running()
    }

    /// Replace the standings collaborator; the next tick uses the new one.
    pub async fn replace_source(&self, source: impl StandingsSource + 'static) {
        self.driver.replace_source(Arc::new(source)).await;
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Fetches already handed to the collaborator are not cancelled; a call
    /// that never returns keeps its task alive after shutdown.
    pub async fn shutdown(mut self) -> Result<()> {
        self.driver.stop().await?;

        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        self.sync_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    standings_source: Option<Arc<dyn StandingsSource>>,
    event_bus: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            standings_source: None,
            event_bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the standings collaborator (required)
    pub fn standings_source(mut self, source: impl StandingsSource + 'static) -> Self {
        self.standings_source = Some(Arc::new(source));
        self
    }

    /// Set the standings collaborator from an already shared instance
    pub fn shared_standings_source(mut self, source: Arc<dyn StandingsSource>) -> Self {
        self.standings_source = Some(source);
        self
    }

    /// Reuse an existing event bus instead of creating one
    pub fn event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Build the runtime. Polling does not start until [`Runtime::start_polling`].
    pub async fn build(self) -> Result<Runtime> {
        let source = self
            .standings_source
            .ok_or(RuntimeError::ProviderNotSet {
                kind: ProviderKind::Standings,
            })?;

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        let handle = RuntimeHandle::new(command_tx.clone(), event_bus.clone());

        let sync_worker = SyncWorker::new(command_rx, event_bus);
        let sync_worker_handle = tokio::spawn(async move {
            sync_worker.run().await;
        });

        // A zero period would panic inside the timer task.
        let period = self.config.poll_interval.max(Duration::from_millis(1));
        let driver = PollingDriver::new(command_tx.clone(), source, period);

        Ok(Runtime {
            handle,
            command_tx,
            driver,
            sync_worker_handle,
        })
    }
}
