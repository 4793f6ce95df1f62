//! Logging Setup
//!
//! One-shot tracing subscriber initialization. Filtering follows
//! `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Safe to call more than once; repeat
/// calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
