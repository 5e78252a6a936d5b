//! Logging setup for the WARC search client.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for the client shell.
///
/// Log levels come from the RUST_LOG environment variable; the default
/// level is INFO.
pub fn init() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
