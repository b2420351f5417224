//! Binance environment selection.
//!
//! Supports production and testnet environments with their REST origins.

use std::fmt;
use std::str::FromStr;

/// Binance environment (production or testnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinanceEnvironment {
    /// Production environment (real money).
    #[default]
    Production,
    /// Testnet environment (fake money for testing).
    Testnet,
}

impl BinanceEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.binance.com",
            Self::Testnet => "https://testnet.binance.vision",
        }
    }
}

impl fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for BinanceEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "mainnet" | "main" => Ok(Self::Production),
            "testnet" | "test" | "sandbox" => Ok(Self::Testnet),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment '{}', expected 'production' or 'testnet'",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}
