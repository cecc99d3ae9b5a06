//! Tracing initialisation
//!
//! Log output goes to stderr so it never mixes with exported data on
//! stdout. The level is taken from `RUST_LOG`, defaulting to `warn`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init() {
    init_with_default("warn");
}

/// Install the global subscriber with a fallback filter used when `RUST_LOG`
/// is unset or invalid
pub fn init_with_default(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (e.g. by a test harness)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .ok();

        tracing::debug!("tracing initialized");
    });
}
