//! Tracing/logging shared setup for the shell and its crates.

/// Initialize process-wide observability (tracing/logging).
///
/// Called once from shell bootstrap; safe to call again (no-ops).
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
