//! Notification seam for transient user-visible messages.

use tracing::{error, info, warn};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
    Info,
}

/// A transient user-visible message, typically rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Notice {
    /// Create an error notice.
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Create an error notice for a failed service call.
    ///
    /// The detail carries the received status code, or the "unknown"
    /// sentinel when the failure produced no code.
    pub fn failure(summary: impl Into<String>, status: Option<u16>) -> Self {
        let code = status.map_or_else(|| "unknown".to_string(), |c| c.to_string());
        Self::error(summary, format!("Received code: {code}"))
    }
}

/// Displays transient messages to the user.
///
/// Both core components report every failure through this seam; no
/// failure is suppressed or batched.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that routes notices into the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => {
                error!(summary = %notice.summary, detail = %notice.detail, "Notice")
            }
            Severity::Warn => warn!(summary = %notice.summary, detail = %notice.detail, "Notice"),
            Severity::Info => info!(summary = %notice.summary, detail = %notice.detail, "Notice"),
        }
    }
}
