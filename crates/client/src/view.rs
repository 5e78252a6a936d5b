//! Render seam consumed by the core components.

use crate::types::{SearchOutcome, ServiceStats};

/// View surface the core writes into.
///
/// Implementations render however they like (title, spinner, table,
/// stats panel); the core only pushes state changes through these
/// methods and never reads anything back.
pub trait ViewState: Send + Sync {
    /// Update the liveness indicator.
    fn set_alive(&self, alive: bool);

    /// One-shot heartbeat animation trigger.
    ///
    /// Edge-triggered: fired exactly once per successful probe, so
    /// consecutive successes each produce a pulse.
    fn pulse_heartbeat(&self);

    /// Toggle the in-flight spinner.
    fn set_loading(&self, loading: bool);

    /// Replace the rendered result table.
    fn show_outcome(&self, outcome: &SearchOutcome);

    /// Render the database statistics panel.
    fn show_stats(&self, stats: &ServiceStats);
}
