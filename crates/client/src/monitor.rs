//! Service liveness monitoring.

use crate::api::ApiClient;
use crate::notify::{Notice, Notifier};
use crate::types::LivenessState;
use crate::view::ViewState;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;
use tokio::time::interval;
use tracing::{debug, warn};

/// Periodic liveness monitor for the search service.
///
/// Issues one probe immediately on start and one per interval after
/// that, for the lifetime of the process. The fixed interval is the
/// only retry mechanism; failed probes are never retried out of band.
#[derive(Clone)]
pub struct HealthMonitor {
    api: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
    view: Arc<dyn ViewState>,
    probe_interval: Duration,
    liveness: Arc<RwLock<LivenessState>>,
}

impl HealthMonitor {
    /// Create a new monitor over the given collaborators.
    pub fn new(
        api: Arc<dyn ApiClient>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ViewState>,
        probe_interval: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            view,
            probe_interval,
            liveness: Arc::new(RwLock::new(LivenessState::default())),
        }
    }

    /// Start the probe schedule.
    ///
    /// The first interval tick fires immediately, giving the startup
    /// probe; subsequent ticks follow at the configured interval.
    pub fn start(&self) {
        let monitor = self.clone();

        tokio::spawn(async move {
            let mut ticker = interval(monitor.probe_interval);
            loop {
                ticker.tick().await;
                monitor.probe().await;
            }
        });
    }

    /// Issue a single liveness probe and fold its outcome into state.
    ///
    /// Success sets `alive`, records the check time and fires one
    /// heartbeat pulse. Failure clears `alive` and produces exactly one
    /// notice carrying the failure's status code.
    pub async fn probe(&self) {
        let result = self.api.status().await;
        let now = SystemTime::now();

        match result {
            Ok(()) => {
                {
                    let mut liveness = self.liveness.write().await;
                    liveness.alive = true;
                    liveness.last_checked = Some(now);
                }

                debug!("Probe succeeded");
                self.view.set_alive(true);
                self.view.pulse_heartbeat();
            }
            Err(e) => {
                {
                    let mut liveness = self.liveness.write().await;
                    liveness.alive = false;
                    liveness.last_checked = Some(now);
                }

                warn!(error = %e, "Probe failed");
                self.view.set_alive(false);
                self.notifier
                    .notify(Notice::failure("Heartbeat failed...", e.status_code()));
            }
        }
    }

    /// Snapshot of the liveness state.
    pub async fn liveness(&self) -> LivenessState {
        *self.liveness.read().await
    }

    /// Whether the most recent probe succeeded.
    pub async fn is_alive(&self) -> bool {
        self.liveness.read().await.alive
    }
}
