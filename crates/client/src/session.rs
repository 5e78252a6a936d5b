//! Search request lifecycle.

use crate::api::ApiClient;
use crate::notify::{Notice, Notifier};
use crate::types::SessionState;
use crate::view::ViewState;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Owns the current query text, the in-flight state and the most
/// recent search outcome.
///
/// Overlap policy: a `search()` call while another request is in
/// flight supersedes it. Each dispatch takes a fresh sequence number
/// and only the most recently dispatched request may apply its
/// resolution; stale resolutions are discarded without touching state.
#[derive(Clone)]
pub struct SearchSession {
    api: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ViewState>,
    state: Arc<RwLock<SessionState>>,
    dispatch_seq: Arc<AtomicU64>,
}

impl SearchSession {
    /// Create a new session over the given collaborators.
    pub fn new(
        api: Arc<dyn ApiClient>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ViewState>,
    ) -> Self {
        Self {
            api,
            notifier,
            view,
            state: Arc::new(RwLock::new(SessionState::default())),
            dispatch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Store the latest query text. Never dispatches a request.
    pub async fn update_query(&self, text: impl Into<String>) {
        self.state.write().await.query = text.into();
    }

    /// Dispatch a search for the current query and await its outcome.
    ///
    /// Empty queries are dispatched as-is; the service decides what an
    /// empty search means. On success the outcome is replaced
    /// atomically; on failure the previous outcome is kept and one
    /// notice is produced. Either way `loading` clears once the latest
    /// dispatch resolves.
    pub async fn search(&self) {
        // Sequence assignment shares the state lock with resolution, so
        // a stale resolution can never interleave with a newer dispatch.
        let (query, seq) = {
            let mut state = self.state.write().await;
            state.loading = true;
            let seq = self.dispatch_seq.fetch_add(1, Ordering::SeqCst) + 1;
            (state.query.clone(), seq)
        };

        self.view.set_loading(true);
        debug!(seq, query = %query, "Dispatching search");

        let result = self.api.query(&query).await;

        let mut state = self.state.write().await;

        // A newer dispatch supersedes this one; its resolution owns the
        // state from here on. Checked under the state lock so check and
        // apply are atomic.
        if self.dispatch_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding stale search resolution");
            return;
        }

        match result {
            Ok(outcome) => {
                state.outcome = Some(outcome.clone());
                state.loading = false;
                drop(state);

                debug!(
                    seq,
                    result_count = outcome.result_count,
                    duration_ms = outcome.duration_ms,
                    "Search succeeded"
                );
                self.view.set_loading(false);
                self.view.show_outcome(&outcome);
            }
            Err(e) => {
                state.loading = false;
                drop(state);

                warn!(seq, error = %e, "Search failed");
                self.view.set_loading(false);
                self.notifier.notify(Notice::failure(
                    "Oops, something went wrong with your request...",
                    e.status_code(),
                ));
            }
        }
    }

    /// Snapshot of the session state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }
}
