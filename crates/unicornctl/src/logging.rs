//! Tracing setup for unicornctl.
//!
//! RUST_LOG wins over the configured level. Logs go to stderr so rendered
//! reports on stdout stay machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber (later calls are no-ops)
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .try_init();
}
