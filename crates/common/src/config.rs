//! Client configuration loaded from environment variables.

use crate::environment::{BinanceEnvironment, ParseEnvironmentError};
use std::time::Duration;
use thiserror::Error;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `recvWindow` sent with signed calls, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Largest `recvWindow` the exchange accepts.
pub const MAX_RECV_WINDOW_MS: u64 = 60_000;

/// Connection settings for the REST client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// HTTPS origin of the v3 REST API, without trailing slash.
    pub base_url: String,
    /// Socket timeout applied to every request.
    pub timeout: Duration,
    /// `recvWindow` attached to signed read and cancel calls. `None` omits it.
    pub recv_window_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(BinanceEnvironment::default())
    }
}

impl ClientConfig {
    /// Default settings for the given environment.
    pub fn for_environment(environment: BinanceEnvironment) -> Self {
        Self {
            base_url: environment.rest_base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            recv_window_ms: Some(DEFAULT_RECV_WINDOW_MS),
        }
    }

    /// Settings pointing at an explicit base URL (used by tests and proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from the environment.
    ///
    /// Reads:
    /// - `BINANCE_ENVIRONMENT` - `production` (default) or `testnet`
    /// - `BINANCE_BASE_URL` - overrides the environment's origin
    /// - `BINANCE_TIMEOUT_SECS` - request timeout in seconds (default 30)
    /// - `BINANCE_RECV_WINDOW` - milliseconds, or `off` to omit it (default 5000)
    ///
    /// A `.env` file is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match var("BINANCE_ENVIRONMENT") {
            Some(value) => value.parse::<BinanceEnvironment>()?,
            None => BinanceEnvironment::default(),
        };
        let mut config = Self::for_environment(environment);

        if let Some(url) = var("BINANCE_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }

        if let Some(raw) = var("BINANCE_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw)?;
        }

        if let Some(raw) = var("BINANCE_RECV_WINDOW") {
            config.recv_window_ms = parse_recv_window(&raw)?;
        }

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            name: "BINANCE_TIMEOUT_SECS",
            value: raw.to_string(),
        }),
    }
}

fn parse_recv_window(raw: &str) -> Result<Option<u64>, ConfigError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    match value.parse::<u64>() {
        Ok(ms) if ms > 0 && ms <= MAX_RECV_WINDOW_MS => Ok(Some(ms)),
        _ => Err(ConfigError::InvalidValue {
            name: "BINANCE_RECV_WINDOW",
            value: raw.to_string(),
        }),
    }
}

/// Error building a [`ClientConfig`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// `BINANCE_ENVIRONMENT` holds an unknown environment.
    #[error(transparent)]
    Environment(#[from] ParseEnvironmentError),

    /// A numeric setting could not be parsed or is out of range.
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}
