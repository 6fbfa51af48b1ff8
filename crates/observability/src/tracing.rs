//! Tracing/logging initialization for the dashboard shell.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Guard decisions and credential decode failures log at `debug`, so
/// `RUST_LOG=vantage_auth=debug` makes a denied navigation explain itself
/// without flooding the default `info` output.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Compact single-line output: this runs inside a client shell, not a
    // log-aggregated server fleet.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
