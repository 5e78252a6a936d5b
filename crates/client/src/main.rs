//! WARC search client console shell.
//!
//! Thin composition root: wires the core components over a plain
//! stdout renderer and feeds it queries read from stdin. All
//! interaction logic lives in the library.

use search_client::{
    App, ClientConfig, HttpApiClient, SearchOutcome, ServiceStats, TracingNotifier, ViewState,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Renders core state to stdout.
struct ConsoleView;

impl ViewState for ConsoleView {
    fn set_alive(&self, alive: bool) {
        tracing::info!(alive, "Service liveness");
    }

    fn pulse_heartbeat(&self) {
        tracing::debug!("Heartbeat");
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("Searching...");
        }
    }

    fn show_outcome(&self, outcome: &SearchOutcome) {
        println!(
            "{} results in {} ms",
            outcome.result_count, outcome.duration_ms
        );
        for row in &outcome.rows {
            println!(
                "  {:<20} {:<12} mixed={:.4} record={:.4} corpus={:.4}  {}",
                row.document_id,
                row.corpus_id,
                row.mixed_score,
                row.record_score,
                row.corpus_score,
                row.url
            );
        }
    }

    fn show_stats(&self, stats: &ServiceStats) {
        println!(
            "Database: {} corpora, {} records, {} words",
            stats.corpus_count, stats.record_count, stats.word_count
        );
    }
}

#[tokio::main]
async fn main() -> common::Result<()> {
    common::logging::init();

    let config = match ClientConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(error = %e, "Configuration error, using defaults");
            ClientConfig::default()
        }
    };

    tracing::info!(base_url = %config.base_url, "WARC Search client starting");

    let api = HttpApiClient::new(&config.base_url, config.request_timeout)
        .map_err(common::Error::api)?;

    let app = App::new(
        Arc::new(api),
        Arc::new(TracingNotifier),
        Arc::new(ConsoleView),
        &config,
    );
    app.init();

    // Query loop: one search per line, EOF exits. Empty lines are
    // dispatched like any other query.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        app.session().update_query(line).await;
        app.session().search().await;
    }

    Ok(())
}
