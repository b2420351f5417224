//! Binance API response types.
//!
//! Every type maps the exchange's camelCase wire names onto snake_case
//! fields. Amounts arrive as JSON strings and are decoded into `Decimal`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response from GET /api/v3/time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Response from GET /api/v3/avgPrice.
#[derive(Debug, Clone, Deserialize)]
pub struct AvgPrice {
    /// Averaging window in minutes.
    pub mins: u32,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
}

/// Response from GET /api/v3/ticker/price.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
}

/// Response from GET /api/v3/ticker/24hr.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker24h {
    pub symbol: String,
    #[serde(
        rename = "priceChange",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub price_change: Decimal,
    #[serde(
        rename = "priceChangePercent",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub price_change_percent: Decimal,
    #[serde(
        rename = "weightedAvgPrice",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub weighted_avg_price: Decimal,
    #[serde(
        rename = "prevClosePrice",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub prev_close_price: Decimal,
    #[serde(
        rename = "lastPrice",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub last_price: Decimal,
    #[serde(rename = "lastQty", deserialize_with = "deserialize_decimal_from_str")]
    pub last_qty: Decimal,
    #[serde(rename = "bidPrice", deserialize_with = "deserialize_decimal_from_str")]
    pub bid_price: Decimal,
    #[serde(rename = "askPrice", deserialize_with = "deserialize_decimal_from_str")]
    pub ask_price: Decimal,
    #[serde(
        rename = "openPrice",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub open_price: Decimal,
    #[serde(
        rename = "highPrice",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub high_price: Decimal,
    #[serde(rename = "lowPrice", deserialize_with = "deserialize_decimal_from_str")]
    pub low_price: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub volume: Decimal,
    #[serde(
        rename = "quoteVolume",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub quote_volume: Decimal,
    #[serde(rename = "openTime")]
    pub open_time: i64,
    #[serde(rename = "closeTime")]
    pub close_time: i64,
    /// Number of trades in the window.
    pub count: u64,
}

/// Balance of a single asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub asset: String,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub free: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub locked: Decimal,
}

/// Response from GET /api/v3/account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "makerCommission")]
    pub maker_commission: i64,
    #[serde(rename = "takerCommission")]
    pub taker_commission: i64,
    #[serde(rename = "buyerCommission")]
    pub buyer_commission: i64,
    #[serde(rename = "sellerCommission")]
    pub seller_commission: i64,
    #[serde(rename = "canTrade")]
    pub can_trade: bool,
    #[serde(rename = "canWithdraw")]
    pub can_withdraw: bool,
    #[serde(rename = "canDeposit")]
    pub can_deposit: bool,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
    #[serde(rename = "accountType")]
    pub account_type: String,
    pub balances: Vec<Balance>,
    pub permissions: Vec<String>,
}

impl Account {
    /// Balances with a positive free amount.
    pub fn non_zero_balances(&self) -> impl Iterator<Item = &Balance> {
        self.balances.iter().filter(|b| b.free > Decimal::ZERO)
    }
}

/// A fill from an order response.
#[derive(Debug, Clone, Deserialize)]
pub struct Fill {
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub qty: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub commission: Decimal,
    #[serde(rename = "commissionAsset")]
    pub commission_asset: String,
    #[serde(rename = "tradeId", default)]
    pub trade_id: Option<u64>,
}

/// An order as returned by place, cancel and open-orders calls.
///
/// Place and cancel responses omit some of the fields open-orders carries,
/// so those are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub symbol: String,
    #[serde(rename = "orderId")]
    pub order_id: u64,
    #[serde(rename = "orderListId")]
    pub order_list_id: i64,
    #[serde(rename = "clientOrderId")]
    pub client_order_id: String,
    #[serde(rename = "transactTime", default)]
    pub transact_time: Option<i64>,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
    #[serde(
        rename = "origQty",
        default,
        deserialize_with = "deserialize_opt_decimal_from_str"
    )]
    pub orig_qty: Option<Decimal>,
    #[serde(
        rename = "executedQty",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub executed_qty: Decimal,
    #[serde(
        rename = "cummulativeQuoteQty",
        deserialize_with = "deserialize_decimal_from_str"
    )]
    pub cummulative_quote_qty: Decimal,
    pub status: String,
    #[serde(rename = "timeInForce")]
    pub time_in_force: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    /// Fills included when the order executed on placement.
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(
        rename = "stopPrice",
        default,
        deserialize_with = "deserialize_opt_decimal_from_str"
    )]
    pub stop_price: Option<Decimal>,
    #[serde(
        rename = "icebergQty",
        default,
        deserialize_with = "deserialize_opt_decimal_from_str"
    )]
    pub iceberg_qty: Option<Decimal>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(rename = "updateTime", default)]
    pub update_time: Option<i64>,
    #[serde(rename = "isWorking", default)]
    pub is_working: Option<bool>,
    #[serde(
        rename = "origQuoteOrderQty",
        default,
        deserialize_with = "deserialize_opt_decimal_from_str"
    )]
    pub orig_quote_order_qty: Option<Decimal>,
}

/// A trade from GET /api/v3/myTrades.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub id: u64,
    #[serde(rename = "orderId")]
    pub order_id: u64,
    #[serde(rename = "orderListId")]
    pub order_list_id: i64,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub price: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub qty: Decimal,
    #[serde(rename = "quoteQty", deserialize_with = "deserialize_decimal_from_str")]
    pub quote_qty: Decimal,
    #[serde(deserialize_with = "deserialize_decimal_from_str")]
    pub commission: Decimal,
    #[serde(rename = "commissionAsset")]
    pub commission_asset: String,
    pub time: i64,
    #[serde(rename = "isBuyer")]
    pub is_buyer: bool,
    #[serde(rename = "isMaker")]
    pub is_maker: bool,
    #[serde(rename = "isBestMatch")]
    pub is_best_match: bool,
}

/// Empty object returned by POST /api/v3/order/test.
#[derive(Debug, Clone, Deserialize)]
pub struct EmptyResponse {}

/// Deserialize a Decimal from a string.
fn deserialize_decimal_from_str<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    s.parse::<Decimal>().map_err(serde::de::Error::custom)
}

/// Deserialize an optional Decimal from a string.
fn deserialize_opt_decimal_from_str<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<&str> = Deserialize::deserialize(deserializer)?;
    s.map(|s| s.parse::<Decimal>().map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_server_time() {
        let json = r#"{"serverTime": 1499827319559}"#;
        let response: ServerTime = serde_json::from_str(json).unwrap();
        assert_eq!(response.server_time, 1499827319559);
    }

    #[test]
    fn test_deserialize_avg_price_and_ticker() {
        let avg: AvgPrice =
            serde_json::from_str(r#"{"mins": 5, "price": "9.35751834", "closeTime": 1694061154503}"#)
                .unwrap();
        assert_eq!(avg.mins, 5);
        assert_eq!(avg.price, dec!(9.35751834));

        let ticker: Ticker =
            serde_json::from_str(r#"{"symbol": "LTCBTC", "price": "4.00000200"}"#).unwrap();
        assert_eq!(ticker.symbol, "LTCBTC");
        assert_eq!(ticker.price, dec!(4.000002));
    }

    #[test]
    fn test_deserialize_ticker_24h() {
        let json = r#"{
            "symbol": "BNBBTC",
            "priceChange": "-94.99999800",
            "priceChangePercent": "-95.960",
            "weightedAvgPrice": "0.29628482",
            "prevClosePrice": "0.10002000",
            "lastPrice": "4.00000200",
            "lastQty": "200.00000000",
            "bidPrice": "4.00000000",
            "bidQty": "100.00000000",
            "askPrice": "4.00000200",
            "askQty": "100.00000000",
            "openPrice": "99.00000000",
            "highPrice": "100.00000000",
            "lowPrice": "0.10000000",
            "volume": "8913.30000000",
            "quoteVolume": "15.30000000",
            "openTime": 1499783499040,
            "closeTime": 1499869899040,
            "firstId": 28385,
            "lastId": 28460,
            "count": 76
        }"#;

        let ticker: Ticker24h = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.symbol, "BNBBTC");
        assert_eq!(ticker.price_change_percent, dec!(-95.960));
        assert_eq!(ticker.high_price, dec!(100));
        assert_eq!(ticker.count, 76);
    }

    #[test]
    fn test_deserialize_account_maps_all_fields() {
        let json = r#"{
            "makerCommission": 15,
            "takerCommission": 15,
            "buyerCommission": 0,
            "sellerCommission": 0,
            "canTrade": true,
            "canWithdraw": false,
            "canDeposit": true,
            "brokered": false,
            "updateTime": 123456789,
            "accountType": "SPOT",
            "balances": [
                {"asset": "BTC", "free": "4723846.89208129", "locked": "0.00000000"},
                {"asset": "LTC", "free": "0.00000000", "locked": "1.00000000"}
            ],
            "permissions": ["SPOT"]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.maker_commission, 15);
        assert_eq!(account.taker_commission, 15);
        assert_eq!(account.buyer_commission, 0);
        assert_eq!(account.seller_commission, 0);
        assert!(account.can_trade);
        assert!(!account.can_withdraw);
        assert!(account.can_deposit);
        assert_eq!(account.update_time, 123456789);
        assert_eq!(account.account_type, "SPOT");
        assert_eq!(account.permissions, vec!["SPOT".to_string()]);
        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.balances[0].free, dec!(4723846.89208129));
        assert_eq!(account.balances[1].locked, dec!(1));

        let assets: Vec<&str> = account
            .non_zero_balances()
            .map(|b| b.asset.as_str())
            .collect();
        assert_eq!(assets, vec!["BTC"]);
    }

    #[test]
    fn test_account_missing_field_fails() {
        let json = r#"{"makerCommission": 15, "takerCommission": 15}"#;
        assert!(serde_json::from_str::<Account>(json).is_err());
    }

    #[test]
    fn test_deserialize_full_order_response() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595,
            "price": "0.00000000",
            "origQty": "10.00000000",
            "executedQty": "10.00000000",
            "cummulativeQuoteQty": "10.00000000",
            "status": "FILLED",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "SELL",
            "fills": [
                {
                    "price": "4000.00000000",
                    "qty": "1.00000000",
                    "commission": "4.00000000",
                    "commissionAsset": "USDT",
                    "tradeId": 123
                }
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.symbol, "BTCUSDT");
        assert_eq!(order.order_id, 28);
        assert_eq!(order.order_list_id, -1);
        assert_eq!(order.transact_time, Some(1507725176595));
        assert_eq!(order.orig_qty, Some(dec!(10)));
        assert_eq!(order.status, "FILLED");
        assert_eq!(order.order_type, "MARKET");
        assert_eq!(order.fills.len(), 1);
        assert_eq!(order.fills[0].commission_asset, "USDT");
        assert_eq!(order.fills[0].trade_id, Some(123));
        assert_eq!(order.stop_price, None);
    }

    #[test]
    fn test_deserialize_open_order() {
        let json = r#"{
            "symbol": "LTCBTC",
            "orderId": 1,
            "orderListId": -1,
            "clientOrderId": "myOrder1",
            "price": "0.1",
            "origQty": "1.0",
            "executedQty": "0.0",
            "cummulativeQuoteQty": "0.0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "stopPrice": "0.0",
            "icebergQty": "0.0",
            "time": 1499827319559,
            "updateTime": 1499827319559,
            "isWorking": true,
            "origQuoteOrderQty": "0.000000"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.price, dec!(0.1));
        assert_eq!(order.stop_price, Some(dec!(0)));
        assert_eq!(order.is_working, Some(true));
        assert_eq!(order.time, Some(1499827319559));
        assert!(order.fills.is_empty());
        assert_eq!(order.transact_time, None);
    }

    #[test]
    fn test_deserialize_trade() {
        let json = r#"{
            "symbol": "BNBBTC",
            "id": 28457,
            "orderId": 100234,
            "orderListId": -1,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "commission": "10.10000000",
            "commissionAsset": "BNB",
            "time": 1499865549590,
            "isBuyer": true,
            "isMaker": false,
            "isBestMatch": true
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.id, 28457);
        assert_eq!(trade.order_id, 100234);
        assert_eq!(trade.quote_qty, dec!(48.000012));
        assert_eq!(trade.commission_asset, "BNB");
        assert!(trade.is_buyer);
        assert!(!trade.is_maker);
        assert!(trade.is_best_match);
    }

    #[test]
    fn test_invalid_decimal_fails() {
        let json = r#"{"symbol": "LTCBTC", "price": "not-a-number"}"#;
        assert!(serde_json::from_str::<Ticker>(json).is_err());
    }

    #[test]
    fn test_empty_response() {
        assert!(serde_json::from_str::<EmptyResponse>("{}").is_ok());
    }
}
