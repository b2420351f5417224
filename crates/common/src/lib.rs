//! Shared environment, configuration and logging setup.

mod config;
mod environment;

pub use config::{
    ClientConfig, ConfigError, DEFAULT_RECV_WINDOW_MS, DEFAULT_TIMEOUT, MAX_RECV_WINDOW_MS,
};
pub use environment::{BinanceEnvironment, ParseEnvironmentError};

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Call once at startup; panics if a global subscriber is already set.
///
/// Honours `RUST_LOG` and defaults to `info`. Logs go to stderr so command
/// output on stdout stays machine-readable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
