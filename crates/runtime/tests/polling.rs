//! Polling cadence, stop semantics and completion ordering, driven on a paused
//! clock.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use overlay_runtime::{
    Event, FetchError, FetchStatus, FixtureStandingsSource, Runtime, RuntimeConfig, RuntimeError,
    StandingsSource, SyncEvent, Topic,
};
use standings_core::{CarClassId, PredictedStandings};
use tokio::sync::{Semaphore, broadcast};
use tokio::time::{Duration, Instant};

const PERIOD: Duration = Duration::from_millis(3000);

fn snapshot(track: &str) -> PredictedStandings {
    PredictedStandings {
        track_name: track.to_string(),
        class_ids: vec![CarClassId(1)],
        ..Default::default()
    }
}

/// Answers every call immediately and counts them.
#[derive(Default)]
struct Counting {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl StandingsSource for Counting {
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(snapshot(&format!("poll-{}", n)))
    }
}

/// Call `i` waits on gate `i`; calls past the last gate never return.
struct Gated {
    calls: AtomicUsize,
    gates: Vec<Arc<Semaphore>>,
}

impl Gated {
    fn new(gates: usize) -> (Self, Vec<Arc<Semaphore>>) {
        let gates: Vec<_> = (0..gates).map(|_| Arc::new(Semaphore::new(0))).collect();
        let source = Self {
            calls: AtomicUsize::new(0),
            gates: gates.clone(),
        };
        (source, gates)
    }
}

#[async_trait]
impl StandingsSource for Gated {
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let Some(gate) = self.gates.get(n) else {
            return std::future::pending().await;
        };
        let _permit = gate
            .acquire()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(snapshot(&format!("poll-{}", n)))
    }
}

/// Plays back a fixed list of answers, then hangs.
struct Scripted(Mutex<VecDeque<Result<PredictedStandings, FetchError>>>);

#[async_trait]
impl StandingsSource for Scripted {
    async fn fetch_latest_standings(&self) -> Result<PredictedStandings, FetchError> {
        let next = self.0.lock().unwrap().pop_front();
        match next {
            Some(answer) => answer,
            None => std::future::pending().await,
        }
    }
}

async fn runtime_with(source: impl StandingsSource + 'static) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            poll_interval: PERIOD,
            ..Default::default()
        })
        .standings_source(source)
        .build()
        .await
        .unwrap()
}

async fn next_snapshot(rx: &mut broadcast::Receiver<Event>) -> Arc<PredictedStandings> {
    loop {
        if let Event::Sync(SyncEvent::SnapshotApplied { snapshot, .. }) = rx.recv().await.unwrap()
        {
            return snapshot;
        }
    }
}

async fn next_status(rx: &mut broadcast::Receiver<Event>) -> FetchStatus {
    loop {
        if let Event::Sync(SyncEvent::StatusChanged { status }) = rx.recv().await.unwrap() {
            return status;
        }
    }
}

async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn first_poll_fires_after_one_period() {
    let mut runtime = runtime_with(Counting::default()).await;
    let mut rx = runtime.handle().subscribe(Topic::Sync);

    let started = Instant::now();
    runtime.start_polling().await.unwrap();

    assert_eq!(next_status(&mut rx).await, FetchStatus::Loading);
    assert_eq!(started.elapsed(), PERIOD);

    let applied = next_snapshot(&mut rx).await;
    assert_eq!(applied.track_name, "poll-0");

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn start_is_idempotent() {
    let source = Counting::default();
    let calls = Arc::clone(&source.calls);
    let mut runtime = runtime_with(source).await;

    runtime.start_polling().await.unwrap();
    runtime.start_polling().await.unwrap();
    assert!(runtime.is_polling());

    tokio::time::sleep(Duration::from_millis(9_500)).await;
    settle().await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stop_halts_dispatch() {
    let source = Counting::default();
    let calls = Arc::clone(&source.calls);
    let mut runtime = runtime_with(source).await;

    runtime.start_polling().await.unwrap();
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    runtime.stop_polling().await.unwrap();
    assert!(!runtime.is_polling());

    tokio::time::sleep(PERIOD * 4).await;
    settle().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Stopping twice is harmless.
    runtime.stop_polling().await.unwrap();
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn restart_after_stop_polls_again() {
    let mut runtime = runtime_with(Counting::default()).await;
    let mut rx = runtime.handle().subscribe(Topic::Sync);

    runtime.start_polling().await.unwrap();
    assert_eq!(next_snapshot(&mut rx).await.track_name, "poll-0");

    runtime.stop_polling().await.unwrap();
    runtime.start_polling().await.unwrap();

    let restarted = Instant::now();
    assert_eq!(next_snapshot(&mut rx).await.track_name, "poll-1");
    assert_eq!(restarted.elapsed(), PERIOD);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn result_arriving_after_stop_is_dropped() {
    let (source, gates) = Gated::new(1);
    let mut runtime = runtime_with(source).await;
    let handle = runtime.handle();

    runtime.start_polling().await.unwrap();
    tokio::time::sleep(Duration::from_millis(3_100)).await;
    settle().await;
    assert_eq!(
        handle.query_state().await.unwrap().status(),
        FetchStatus::Loading
    );

    runtime.stop_polling().await.unwrap();
    gates[0].add_permits(1);
    settle().await;

    let state = handle.query_state().await.unwrap();
    assert!(state.latest().is_empty());
    assert_eq!(state.status(), FetchStatus::Loading);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn last_completion_wins() {
    let (source, gates) = Gated::new(2);
    let mut runtime = runtime_with(source).await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Sync);

    runtime.start_polling().await.unwrap();
    tokio::time::sleep(Duration::from_millis(6_100)).await;
    settle().await;

    // The newer poll completes first...
    gates[1].add_permits(1);
    assert_eq!(next_snapshot(&mut rx).await.track_name, "poll-1");

    // ...and the older one overwrites it when it completes.
    gates[0].add_permits(1);
    assert_eq!(next_snapshot(&mut rx).await.track_name, "poll-0");

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.latest().track_name, "poll-0");
    assert_eq!(state.status(), FetchStatus::Idle);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn failed_poll_keeps_latest_snapshot() {
    let script = VecDeque::from([
        Ok(snapshot("first")),
        Err(FetchError::Decode("truncated".into())),
    ]);
    let mut runtime = runtime_with(Scripted(Mutex::new(script))).await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Sync);

    runtime.start_polling().await.unwrap();
    assert_eq!(next_snapshot(&mut rx).await.track_name, "first");

    assert_eq!(next_status(&mut rx).await, FetchStatus::Loading);
    assert_eq!(next_status(&mut rx).await, FetchStatus::Failed);

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.status(), FetchStatus::Failed);
    assert_eq!(state.latest().track_name, "first");

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn replaced_source_is_used_on_next_tick() {
    let script = VecDeque::from([Ok(snapshot("old"))]);
    let mut runtime = runtime_with(Scripted(Mutex::new(script))).await;
    let mut rx = runtime.handle().subscribe(Topic::Sync);

    runtime.start_polling().await.unwrap();
    assert_eq!(next_snapshot(&mut rx).await.track_name, "old");

    runtime
        .replace_source(Scripted(Mutex::new(VecDeque::from([Ok(snapshot("new"))]))))
        .await;
    assert_eq!(next_snapshot(&mut rx).await.track_name, "new");

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn selection_resolves_and_cycles_through_handle() {
    let mut runtime = runtime_with(FixtureStandingsSource::sample()).await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Sync);

    runtime.start_polling().await.unwrap();
    next_snapshot(&mut rx).await;

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.selected_class_id(), CarClassId(84));
    assert_eq!(state.selected_standing().unwrap().class_name, "GTP");

    assert_eq!(handle.cycle_selected_class().await.unwrap(), CarClassId(83));
    assert_eq!(handle.cycle_selected_class().await.unwrap(), CarClassId(84));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn zero_interval_is_clamped() {
    let source = Counting::default();
    let calls = Arc::clone(&source.calls);
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            poll_interval: Duration::ZERO,
            ..Default::default()
        })
        .standings_source(source)
        .build()
        .await
        .unwrap();

    runtime.start_polling().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    settle().await;

    assert!(calls.load(Ordering::SeqCst) > 0);
    runtime.stop_polling().await.unwrap();
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn build_requires_a_standings_source() {
    let result = Runtime::builder().build().await;
    assert!(matches!(result, Err(RuntimeError::ProviderNotSet { .. })));
}
