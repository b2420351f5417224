//! Authentication and signing for the Binance REST API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated (`SIGNED`) API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Signs the URL-encoded parameter string exactly as
//!   it will be sent, in insertion order.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! // `server_time_ms` comes from GET /api/v3/time, never the local clock.
//! let params = [("symbol", "BTCUSDT"), ("side", "BUY")];
//! let signed = signer.sign_params(&params, server_time_ms)?;
//! let query = signed.to_query_string();
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_ENV, SECRET_KEY_ENV};
pub use error::AuthError;
pub use signer::{RequestSigner, SignedRequest, SIGNATURE_PARAM, TIMESTAMP_PARAM};
