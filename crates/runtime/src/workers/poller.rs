//! Fixed-cadence polling of the standings collaborator.
//!
//! The driver owns one timer task at a time. Each tick dispatches
//! `FetchPending`, then spawns the fetch so a slow backend never delays the
//! next tick; several fetches may be in flight at once and their results reach
//! the sync worker in completion order.
//!
//! The collaborator lives in a replaceable slot. The timer task reads the slot
//! on every tick, so a replacement takes effect on the next tick without
//! restarting the timer.

use std::sync::Arc;

use tokio::sync::{RwLock, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::sync::{Command, DispatchEpoch};
use crate::api::{Result, RuntimeError, StandingsSource};

type SourceSlot = Arc<RwLock<Arc<dyn StandingsSource>>>;

struct TimerHandle {
    epoch: DispatchEpoch,
    task: JoinHandle<()>,
}

/// Explicit start/stop owner of the polling timer.
pub struct PollingDriver {
    command_tx: mpsc::Sender<Command>,
    source: SourceSlot,
    period: Duration,
    timer: Option<TimerHandle>,
    next_epoch: DispatchEpoch,
}

impl PollingDriver {
    pub fn new(
        command_tx: mpsc::Sender<Command>,
        source: Arc<dyn StandingsSource>,
        period: Duration,
    ) -> Self {
        Self {
            command_tx,
            source: Arc::new(RwLock::new(source)),
            period,
            timer: None,
            next_epoch: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Swaps the collaborator used by subsequent ticks.
    pub async fn replace_source(&self, source: Arc<dyn StandingsSource>) {
        *self.source.write().await = source;
    }

    /// Starts the repeating timer. The first poll happens one period from now.
    ///
    /// Calling this while the timer is already running has no effect.
    pub async fn start(&mut self) -> Result<()> {
        if self.timer.is_some() {
            debug!("polling already running");
            return Ok(());
        }

        let epoch = self.next_epoch;
        self.next_epoch += 1;

        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Attach {
                epoch,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;

        let task = tokio::spawn(run_timer(
            epoch,
            self.period,
            Arc::clone(&self.source),
            self.command_tx.clone(),
        ));

        info!("polling started every {:?} (run {})", self.period, epoch);
        self.timer = Some(TimerHandle { epoch, task });
        Ok(())
    }

    /// Cancels the timer.
    ///
    /// After this returns no further poll of the current run is dispatched, and
    /// results of fetches that are still in flight are discarded by the sync
    /// worker. Stopping a driver that is not running is a no-op.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(TimerHandle { epoch, task }) = self.timer.take() else {
            return Ok(());
        };

        task.abort();
        match task.await {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => return Err(RuntimeError::WorkerJoin(err)),
        }

        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Detach {
                epoch,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;

        info!("polling stopped (run {})", epoch);
        Ok(())
    }
}

impl Drop for PollingDriver {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.task.abort();
        }
    }
}

async fn run_timer(
    epoch: DispatchEpoch,
    period: Duration,
    source: SourceSlot,
    command_tx: mpsc::Sender<Command>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        if command_tx
            .send(Command::FetchPending { epoch })
            .await
            .is_err()
        {
            debug!("sync worker gone, polling timer exiting");
            break;
        }

        let source = Arc::clone(&*source.read().await);
        let tx = command_tx.clone();
        tokio::spawn(async move {
            let cmd = match source.fetch_latest_standings().await {
                Ok(snapshot) => Command::FetchFulfilled {
                    epoch,
                    snapshot: Box::new(snapshot),
                },
                Err(error) => Command::FetchFailed { epoch, error },
            };

            if tx.send(cmd).await.is_err() {
                debug!("sync worker gone, dropping poll result");
            }
        });
    }
}
