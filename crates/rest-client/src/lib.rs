//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent transport error handling via `RestError`
//! - GET, POST and DELETE with pre-encoded query strings
//! - Header injection for authentication
//! - A fixed per-request timeout
//!
//! Response bodies are returned as text together with the status code, so
//! the caller decides how to interpret error payloads.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use std::time::Duration;
//!
//! let client = RestClient::new("https://api.binance.com", Duration::from_secs(10))?;
//! let response = client.get("/api/v3/time", None, None).await?;
//! println!("{} {}", response.status(), response.body());
//! ```

mod client;
mod error;

pub use client::{RestClient, RestResponse};
pub use error::RestError;
