//! Stderr logging for the command-line host.
//!
//! The library only emits `tracing` events. Installing a subscriber is left to
//! the binary; inside a function host with no subscriber the events are no-ops.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call more than
/// once: later calls leave the existing subscriber in place.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already initialized");
    }
}
