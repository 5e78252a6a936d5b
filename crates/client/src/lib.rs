//! Client-side core for the WARC search UI.
//!
//! Two cooperating components drive all user-observable state:
//!
//! - [`HealthMonitor`] probes the service on a fixed interval and keeps
//!   the liveness indicator (and its heartbeat pulse) up to date.
//! - [`SearchSession`] owns the query text and the in-flight search
//!   request, reconciling each resolution into displayable state.
//!
//! Both report failures through a shared [`Notifier`] and push state
//! changes into a [`ViewState`]; neither knows how rendering happens.
//! [`App`] composes them over an [`ApiClient`] at startup.
//!
//! # Example
//!
//! ```no_run
//! use search_client::{App, ClientConfig, HttpApiClient, TracingNotifier};
//! use std::sync::Arc;
//!
//! # struct NullView;
//! # impl search_client::ViewState for NullView {
//! #     fn set_alive(&self, _: bool) {}
//! #     fn pulse_heartbeat(&self) {}
//! #     fn set_loading(&self, _: bool) {}
//! #     fn show_outcome(&self, _: &search_client::SearchOutcome) {}
//! #     fn show_stats(&self, _: &search_client::ServiceStats) {}
//! # }
//! # async fn example() -> Result<(), search_client::ApiError> {
//! let config = ClientConfig::default();
//! let api = Arc::new(HttpApiClient::new(&config.base_url, config.request_timeout)?);
//! let app = App::new(api, Arc::new(TracingNotifier), Arc::new(NullView), &config);
//! app.init();
//!
//! app.session().update_query("south pole expedition").await;
//! app.session().search().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod monitor;
pub mod notify;
pub mod session;
pub mod types;
pub mod view;

pub use api::{ApiClient, ApiError, HttpApiClient};
pub use app::App;
pub use config::{ClientConfig, ConfigError};
pub use monitor::HealthMonitor;
pub use notify::{Notice, Notifier, Severity, TracingNotifier};
pub use session::SearchSession;
pub use types::{LivenessState, ResultRow, SearchOutcome, ServiceStats, SessionState};
pub use view::ViewState;

#[cfg(test)]
pub(crate) mod test_support;
