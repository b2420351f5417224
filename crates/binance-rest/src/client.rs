//! Binance REST API client.

use crate::error::{decode_response, BinanceRestError};
use crate::responses::{
    Account, AvgPrice, EmptyResponse, Order, ServerTime, Ticker, Ticker24h, Trade,
};
use auth::{ApiCredentials, RequestSigner, SignedRequest};
use common::ClientConfig;
use model::NewOrder;
use rest_client::{RestClient, RestResponse};
use serde::de::DeserializeOwned;

/// Header carrying the API key on signed calls.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// REST endpoint paths.
pub mod endpoints {
    pub const SERVER_TIME: &str = "/api/v3/time";
    pub const AVG_PRICE: &str = "/api/v3/avgPrice";
    pub const TICKER_PRICE: &str = "/api/v3/ticker/price";
    pub const TICKER_24H: &str = "/api/v3/ticker/24hr";
    pub const ACCOUNT: &str = "/api/v3/account";
    pub const MY_TRADES: &str = "/api/v3/myTrades";
    pub const OPEN_ORDERS: &str = "/api/v3/openOrders";
    pub const ORDER: &str = "/api/v3/order";
    pub const ORDER_TEST: &str = "/api/v3/order/test";
}

#[derive(Debug, Clone, Copy)]
enum SignedMethod {
    Get,
    Post,
    Delete,
}

/// Binance REST API client with authentication support.
///
/// Every call is a single request/response exchange. Signed calls fetch the
/// server time first and are not sent if that fetch fails.
pub struct BinanceRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    config: ClientConfig,
}

impl BinanceRestClient {
    /// Create a client from explicit settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(
        credentials: ApiCredentials,
        config: ClientConfig,
    ) -> Result<Self, BinanceRestError> {
        let client = RestClient::new(&config.base_url, config.timeout)?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    // ========================================================================
    // Signing
    // ========================================================================

    /// Get the current exchange server time in milliseconds.
    ///
    /// GET /api/v3/time
    pub async fn server_time(&self) -> Result<i64, BinanceRestError> {
        let response: ServerTime = self.public_get(endpoints::SERVER_TIME, &[]).await?;
        Ok(response.server_time)
    }

    /// Timestamp and sign a parameter set with the exchange's clock.
    ///
    /// Fetches the server time, appends it as `timestamp` and signs the
    /// encoded parameters in the given order. Fails without falling back to
    /// the local clock if the time endpoint cannot be reached.
    pub async fn sign(&self, params: &[(&str, &str)]) -> Result<SignedRequest, BinanceRestError> {
        let timestamp = self.server_time().await?;
        let signer = RequestSigner::new(&self.credentials);
        let signed = signer.sign_params(params, timestamp)?;

        tracing::debug!(timestamp = timestamp, "Signed request parameters");
        Ok(signed)
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Get the current average price of a symbol.
    ///
    /// GET /api/v3/avgPrice
    pub async fn avg_price(&self, symbol: &str) -> Result<AvgPrice, BinanceRestError> {
        self.public_get(endpoints::AVG_PRICE, &[("symbol", symbol)])
            .await
    }

    /// Get the latest price of a symbol.
    ///
    /// GET /api/v3/ticker/price
    pub async fn latest_price(&self, symbol: &str) -> Result<Ticker, BinanceRestError> {
        self.public_get(endpoints::TICKER_PRICE, &[("symbol", symbol)])
            .await
    }

    /// Get 24 hour rolling window statistics for a symbol.
    ///
    /// GET /api/v3/ticker/24hr
    pub async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h, BinanceRestError> {
        self.public_get(endpoints::TICKER_24H, &[("symbol", symbol)])
            .await
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Get account information and balances.
    ///
    /// GET /api/v3/account (signed)
    pub async fn account(&self) -> Result<Account, BinanceRestError> {
        let params = self.with_recv_window(Vec::new());
        self.signed_request(SignedMethod::Get, endpoints::ACCOUNT, &params)
            .await
    }

    /// Get the account's trade history for a symbol.
    ///
    /// GET /api/v3/myTrades (signed)
    pub async fn my_trades(&self, symbol: &str) -> Result<Vec<Trade>, BinanceRestError> {
        let params = self.with_recv_window(vec![("symbol", symbol.to_string())]);
        let trades: Vec<Trade> = self
            .signed_request(SignedMethod::Get, endpoints::MY_TRADES, &params)
            .await?;

        tracing::debug!(symbol = %symbol, count = trades.len(), "Trades received");
        Ok(trades)
    }

    /// Get all open orders across symbols.
    ///
    /// GET /api/v3/openOrders (signed)
    pub async fn open_orders(&self) -> Result<Vec<Order>, BinanceRestError> {
        let params = self.with_recv_window(Vec::new());
        self.signed_request(SignedMethod::Get, endpoints::OPEN_ORDERS, &params)
            .await
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Place a new order.
    ///
    /// POST /api/v3/order (signed)
    ///
    /// MARKET orders send `symbol, side, type, quantity`. LIMIT orders add
    /// `timeInForce=GTC` and `price`.
    pub async fn place_order(&self, order: &NewOrder) -> Result<Order, BinanceRestError> {
        let params = order.to_params();

        tracing::info!(
            symbol = %order.symbol(),
            side = %order.side(),
            order_type = %order.order_type(),
            quantity = %order.quantity(),
            price = ?order.price(),
            "Placing order"
        );

        let response: Order = self
            .signed_request(SignedMethod::Post, endpoints::ORDER, &params)
            .await?;

        tracing::info!(
            order_id = response.order_id,
            status = %response.status,
            fills = response.fills.len(),
            "Order placed"
        );

        Ok(response)
    }

    /// Validate an order with the exchange without placing it.
    ///
    /// POST /api/v3/order/test (signed)
    pub async fn test_order(&self, order: &NewOrder) -> Result<(), BinanceRestError> {
        let params = order.to_params();

        let _: EmptyResponse = self
            .signed_request(SignedMethod::Post, endpoints::ORDER_TEST, &params)
            .await?;

        tracing::info!(symbol = %order.symbol(), "Test order accepted");
        Ok(())
    }

    /// Cancel an open order by exchange order ID.
    ///
    /// DELETE /api/v3/order (signed)
    pub async fn cancel_order(
        &self,
        symbol: &str,
        order_id: u64,
    ) -> Result<Order, BinanceRestError> {
        let params = self.with_recv_window(vec![
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ]);

        tracing::info!(symbol = %symbol, order_id = order_id, "Canceling order");

        let response: Order = self
            .signed_request(SignedMethod::Delete, endpoints::ORDER, &params)
            .await?;

        tracing::info!(
            order_id = response.order_id,
            status = %response.status,
            "Order canceled"
        );

        Ok(response)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn with_recv_window(
        &self,
        mut params: Vec<(&'static str, String)>,
    ) -> Vec<(&'static str, String)> {
        if let Some(ms) = self.config.recv_window_ms {
            params.push(("recvWindow", ms.to_string()));
        }
        params
    }

    async fn public_get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, BinanceRestError> {
        let query = serde_urlencoded::to_string(params)?;
        let response = self.client.get(path, Some(&query), None).await?;
        decode_response(response)
    }

    async fn signed_request<T: DeserializeOwned>(
        &self,
        method: SignedMethod,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, BinanceRestError> {
        let param_refs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let signed = self.sign(&param_refs).await?;
        let query = signed.to_query_string();
        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        let response: RestResponse = match method {
            SignedMethod::Get => self.client.get(path, Some(&query), Some(&headers)).await?,
            SignedMethod::Post => self.client.post(path, Some(&query), Some(&headers)).await?,
            SignedMethod::Delete => {
                self.client
                    .delete(path, Some(&query), Some(&headers))
                    .await?
            }
        };

        decode_response(response)
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("recv_window_ms", &self.config.recv_window_ms)
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(recv_window_ms: Option<u64>) -> BinanceRestClient {
        let mut config = ClientConfig::with_base_url("https://api.example.com");
        config.recv_window_ms = recv_window_ms;
        BinanceRestClient::with_config(ApiCredentials::new("key".into(), "secret".into()), config)
            .unwrap()
    }

    #[test]
    fn test_with_recv_window_appends_last() {
        let params = client(Some(5000)).with_recv_window(vec![("symbol", "BTCUSDT".into())]);
        assert_eq!(
            params,
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("recvWindow", "5000".to_string())
            ]
        );
    }

    #[test]
    fn test_with_recv_window_disabled() {
        let params = client(None).with_recv_window(vec![("symbol", "BTCUSDT".into())]);
        assert_eq!(params, vec![("symbol", "BTCUSDT".to_string())]);
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug_str = format!("{:?}", client(None));
        assert!(debug_str.contains("api.example.com"));
        assert!(!debug_str.contains("secret"));
    }
}
