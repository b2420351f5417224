//! Binance REST API client.
//!
//! This crate provides a typed client for the Binance spot REST API with:
//!
//! - **Server-time signing**: every signed call is timestamped with the
//!   exchange's clock, fetched immediately before signing
//! - **Market data**: average price, latest price and 24h ticker
//! - **Account data**: balances, trade history and open orders
//! - **Order management**: place, test and cancel orders
//! - **Error handling**: transport failures, exchange error payloads and
//!   schema mismatches are distinct `BinanceRestError` variants
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use binance_rest::BinanceRestClient;
//! use common::ClientConfig;
//! use model::{NewOrder, OrderSide};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let client = BinanceRestClient::with_config(credentials, ClientConfig::from_env()?)?;
//!
//! let account = client.account().await?;
//!
//! let order = NewOrder::limit("BTCUSDT", OrderSide::Buy, dec!(0.001), dec!(30000))?;
//! let placed = client.place_order(&order).await?;
//! ```

mod client;
mod error;
mod responses;

pub use client::{endpoints, BinanceRestClient, API_KEY_HEADER};
pub use error::BinanceRestError;
pub use responses::{
    Account, AvgPrice, Balance, EmptyResponse, Fill, Order, ServerTime, Ticker, Ticker24h, Trade,
};
