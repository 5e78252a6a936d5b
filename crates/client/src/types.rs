//! Data model for the search client core.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::SystemTime;

/// A single ranked search result row.
///
/// Rows are immutable once received and keep the order the service
/// returned them in; the client never re-sorts. The wire format uses
/// `trec_id`, `corpus` and `score_mixed` for the first three fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "trec_id")]
    pub document_id: String,

    #[serde(rename = "corpus")]
    pub corpus_id: String,

    #[serde(rename = "score_mixed")]
    pub mixed_score: f64,

    pub record_score: f64,

    pub corpus_score: f64,

    pub url: String,
}

/// The resolved payload of a completed search request.
///
/// Replaces the previous outcome atomically; the view never observes a
/// partially applied update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Result rows in service order.
    #[serde(rename = "result")]
    pub rows: Vec<ResultRow>,

    /// Total number of results. Zero is a valid, non-error outcome.
    pub result_count: u64,

    /// Server-side search duration in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

/// Database statistics, fetched once at startup.
///
/// The service derives these from SQL counts and may emit nulls;
/// missing or null counts map to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceStats {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub corpus_count: u64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub record_count: u64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub word_count: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Service liveness as observed by the health monitor.
///
/// Mutated only by [`HealthMonitor`](crate::HealthMonitor), once per
/// probe completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LivenessState {
    /// Outcome of the most recent probe.
    pub alive: bool,

    /// Completion time of the most recent probe.
    pub last_checked: Option<SystemTime>,
}

/// Search session state.
///
/// Owned exclusively by [`SearchSession`](crate::SearchSession).
/// `loading` is true from request dispatch until the resolution of the
/// most recently dispatched request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub loading: bool,
    pub query: String,
    pub outcome: Option<SearchOutcome>,
}
