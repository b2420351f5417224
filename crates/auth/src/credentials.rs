//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "BINANCE_SECRET_KEY";

/// API credentials for authenticated requests.
///
/// The API key travels in the `X-MBX-APIKEY` header. The secret key is only
/// ever used as the HMAC key and is wrapped in `SecretString`, which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BINANCE_API_KEY` - The API key (public)
    /// - `BINANCE_SECRET_KEY` - The secret key (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is unset or empty.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = required_var(API_KEY_ENV)?;
        let secret_key = required_var(SECRET_KEY_ENV)?;

        Ok(Self::new(api_key, secret_key))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials come from other sources.
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

fn required_var(name: &str) -> Result<String, AuthError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AuthError::MissingEnvVar(name.into())),
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
