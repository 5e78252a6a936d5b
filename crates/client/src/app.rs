//! Startup composition for the client.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::monitor::HealthMonitor;
use crate::notify::{Notice, Notifier};
use crate::session::SearchSession;
use crate::types::ServiceStats;
use crate::view::ViewState;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Composition root for the client core.
///
/// Wires [`HealthMonitor`] and [`SearchSession`] over shared
/// collaborators and owns the one-time stats fetch.
pub struct App {
    monitor: HealthMonitor,
    session: SearchSession,
    api: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ViewState>,
    stats: Arc<RwLock<Option<ServiceStats>>>,
}

impl App {
    /// Build the component graph from injected collaborators.
    pub fn new(
        api: Arc<dyn ApiClient>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ViewState>,
        config: &ClientConfig,
    ) -> Self {
        let monitor = HealthMonitor::new(
            api.clone(),
            notifier.clone(),
            view.clone(),
            config.probe_interval,
        );
        let session = SearchSession::new(api.clone(), notifier.clone(), view.clone());

        Self {
            monitor,
            session,
            api,
            notifier,
            view,
            stats: Arc::new(RwLock::new(None)),
        }
    }

    /// Start the client.
    ///
    /// Begins the probe schedule (which fires its immediate startup
    /// probe) and issues the one-time stats fetch. The two run
    /// independently and unordered; a stats failure never affects the
    /// probe schedule.
    pub fn init(&self) {
        self.monitor.start();

        let api = self.api.clone();
        let notifier = self.notifier.clone();
        let view = self.view.clone();
        let stats = self.stats.clone();

        tokio::spawn(async move {
            match api.stats().await {
                Ok(fetched) => {
                    info!(
                        corpus_count = fetched.corpus_count,
                        record_count = fetched.record_count,
                        word_count = fetched.word_count,
                        "Fetched service stats"
                    );
                    *stats.write().await = Some(fetched);
                    view.show_stats(&fetched);
                }
                Err(e) => {
                    warn!(error = %e, "Stats fetch failed");
                    notifier.notify(Notice::failure(
                        "Failed to get database stats.",
                        e.status_code(),
                    ));
                }
            }
        });
    }

    /// The health monitor.
    pub fn monitor(&self) -> &HealthMonitor {
        &self.monitor
    }

    /// The search session.
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// The stats fetched at startup, if the fetch succeeded.
    pub async fn stats(&self) -> Option<ServiceStats> {
        *self.stats.read().await
    }
}
