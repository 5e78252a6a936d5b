//! Recording fakes shared by the unit tests.

use crate::notify::{Notice, Notifier};
use crate::types::{ResultRow, SearchOutcome, ServiceStats};
use crate::view::ViewState;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

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

/// Build an outcome with `count` synthetic rows.
pub fn outcome_with_rows(count: u64, duration_ms: u64) -> SearchOutcome {
    let rows = (0..count)
        .map(|i| ResultRow {
            document_id: format!("GX000-00-{i:07}"),
            corpus_id: format!("gov2-{i}"),
            mixed_score: 1.0 - i as f64 * 0.1,
            record_score: 0.5,
            corpus_score: 0.7,
            url: format!("http://example.gov/{i}"),
        })
        .collect::<Vec<_>>();

    SearchOutcome {
        result_count: rows.len() as u64,
        rows,
        duration_ms,
    }
}
