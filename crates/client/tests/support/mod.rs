//! Shared fakes for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use search_client::{
    ApiClient, ApiError, Notice, Notifier, ResultRow, SearchOutcome, ServiceStats, ViewState,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

/// Notifier that records every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// View that records every state push.
#[derive(Default)]
pub struct RecordingView {
    alive: Mutex<Vec<bool>>,
    pulses: AtomicUsize,
    loading: Mutex<Vec<bool>>,
    outcomes: Mutex<Vec<SearchOutcome>>,
    stats: Mutex<Vec<ServiceStats>>,
}

impl RecordingView {
    pub fn alive_updates(&self) -> Vec<bool> {
        self.alive.lock().unwrap().clone()
    }

    pub fn pulse_count(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }

    pub fn loading_updates(&self) -> Vec<bool> {
        self.loading.lock().unwrap().clone()
    }

    pub fn outcomes(&self) -> Vec<SearchOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn stats_updates(&self) -> Vec<ServiceStats> {
        self.stats.lock().unwrap().clone()
    }
}

impl ViewState for RecordingView {
    fn set_alive(&self, alive: bool) {
        self.alive.lock().unwrap().push(alive);
    }

    fn pulse_heartbeat(&self) {
        self.pulses.fetch_add(1, Ordering::SeqCst);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.lock().unwrap().push(loading);
    }

    fn show_outcome(&self, outcome: &SearchOutcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }

    fn show_stats(&self, stats: &ServiceStats) {
        self.stats.lock().unwrap().push(*stats);
    }
}

/// API fake whose query resolutions are gated on oneshot channels, so a
/// test controls exactly when and in what order dispatches resolve.
pub struct GatedApi {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<SearchOutcome, ApiError>>>>,
}

impl GatedApi {
    pub fn new(
        gates: Vec<oneshot::Receiver<Result<SearchOutcome, ApiError>>>,
    ) -> Self {
        Self {
            gates: Mutex::new(gates.into()),
        }
    }
}

#[async_trait]
impl ApiClient for GatedApi {
    async fn status(&self) -> Result<(), ApiError> {
        panic!("unexpected status call");
    }

    async fn stats(&self) -> Result<ServiceStats, ApiError> {
        panic!("unexpected stats call");
    }

    async fn query(&self, _query: &str) -> Result<SearchOutcome, ApiError> {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected query dispatch");
        gate.await.expect("gate dropped")
    }
}

/// API fake with canned probe/stats outcomes and call counting.
pub struct ScriptedApi {
    status_calls: AtomicUsize,
    status_ok: bool,
    stats_result: Mutex<Option<Result<ServiceStats, ApiError>>>,
}

impl ScriptedApi {
    pub fn new(status_ok: bool, stats_result: Result<ServiceStats, ApiError>) -> Self {
        Self {
            status_calls: AtomicUsize::new(0),
            status_ok,
            stats_result: Mutex::new(Some(stats_result)),
        }
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApiClient for ScriptedApi {
    async fn status(&self) -> Result<(), ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.status_ok {
            Ok(())
        } else {
            Err(ApiError::Status(500))
        }
    }

    async fn stats(&self) -> Result<ServiceStats, ApiError> {
        self.stats_result
            .lock()
            .unwrap()
            .take()
            .expect("stats fetched more than once")
    }

    async fn query(&self, _query: &str) -> Result<SearchOutcome, ApiError> {
        panic!("unexpected query dispatch");
    }
}

/// Build an outcome with `count` synthetic rows tagged by `label`.
pub fn outcome(label: &str, count: u64, duration_ms: u64) -> SearchOutcome {
    let rows = (0..count)
        .map(|i| ResultRow {
            document_id: format!("{label}-{i:04}"),
            corpus_id: format!("gov2-{label}"),
            mixed_score: 1.0 - i as f64 * 0.1,
            record_score: 0.5,
            corpus_score: 0.7,
            url: format!("http://example.gov/{label}/{i}"),
        })
        .collect::<Vec<_>>();

    SearchOutcome {
        result_count: rows.len() as u64,
        rows,
        duration_ms,
    }
}
