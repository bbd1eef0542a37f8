//! Logging setup for binaries embedding the comparators.
//!
//! The library itself only emits `tracing` events (`debug!` when a payload
//! fails to parse or a diff is suppressed) and never installs a subscriber;
//! these helpers are for the hosting binary. Output goes to stderr and the
//! `RUST_LOG` environment variable controls filtering, e.g.
//! `RUST_LOG=kibana_diff_suppress=debug` to see every suppression decision.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Panics
///
/// Panics if a global subscriber is already set; use [`try_init_logging`]
/// when that is a legitimate state (tests, repeated initialization).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Install the [`init_logging`] subscriber unless one is already set.
///
/// Returns `true` when this call installed the subscriber.
pub fn try_init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
