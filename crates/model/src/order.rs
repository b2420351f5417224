//! Order request types and the order-placement parameter mapping.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors building or parsing an order request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Quantity must be strictly positive.
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    /// LIMIT orders need a price.
    #[error("LIMIT orders require a price")]
    MissingPrice,

    /// Price must be strictly positive.
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    /// Symbol is empty.
    #[error("symbol must not be empty")]
    EmptySymbol,

    /// Unrecognised side or type string.
    #[error("unknown {kind} '{value}'")]
    Unknown { kind: &'static str, value: String },
}

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Convert from Binance string representation.
    pub fn from_binance_str(s: &str) -> Option<Self> {
        match s {
            "BUY" => Some(Self::Buy),
            "SELL" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_binance_str())
    }
}

impl FromStr for OrderSide {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_binance_str(&s.trim().to_uppercase()).ok_or_else(|| OrderError::Unknown {
            kind: "side",
            value: s.to_string(),
        })
    }
}

/// Order type supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Execute immediately at the best available price.
    Market,
    /// Rest on the book at a fixed price until filled or canceled.
    Limit,
}

impl OrderType {
    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_binance_str())
    }
}

impl FromStr for OrderType {
    type Err = OrderError;

    /// Accepts `MARKET`/`M` and `LIMIT`/`L`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MARKET" => Ok(Self::Market),
            "L" | "LIMIT" => Ok(Self::Limit),
            _ => Err(OrderError::Unknown {
                kind: "order type",
                value: s.to_string(),
            }),
        }
    }
}

/// Time in force for limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    /// Good Till Canceled - remains active until filled or canceled.
    GTC,
}

impl TimeInForce {
    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::GTC => "GTC",
        }
    }
}

/// A validated request to place a new order.
///
/// Quantity is always expressed in base-asset units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    symbol: String,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

impl NewOrder {
    /// Build and validate an order request.
    ///
    /// The symbol is upper-cased. A price passed with a MARKET order is
    /// discarded; a LIMIT order without a positive price is rejected.
    pub fn new(
        symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, OrderError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(OrderError::EmptySymbol);
        }

        if quantity <= Decimal::ZERO {
            return Err(OrderError::NonPositiveQuantity(quantity));
        }

        let price = match order_type {
            OrderType::Market => None,
            OrderType::Limit => match price {
                None => return Err(OrderError::MissingPrice),
                Some(p) if p <= Decimal::ZERO => return Err(OrderError::NonPositivePrice(p)),
                Some(p) => Some(p),
            },
        };

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
        })
    }

    /// MARKET order for `quantity` base units.
    pub fn market(symbol: &str, side: OrderSide, quantity: Decimal) -> Result<Self, OrderError> {
        Self::new(symbol, side, OrderType::Market, quantity, None)
    }

    /// Good-till-canceled LIMIT order.
    pub fn limit(
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, OrderError> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Time in force sent with this order, if any.
    pub fn time_in_force(&self) -> Option<TimeInForce> {
        match self.order_type {
            OrderType::Market => None,
            OrderType::Limit => Some(TimeInForce::GTC),
        }
    }

    /// Exchange parameters in wire order.
    ///
    /// | type   | fields                                                  |
    /// |--------|---------------------------------------------------------|
    /// | MARKET | symbol, side, type, quantity                            |
    /// | LIMIT  | symbol, side, type, timeInForce=GTC, price, quantity    |
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_binance_str().to_string()),
            ("type", self.order_type.as_binance_str().to_string()),
        ];

        if let Some(tif) = self.time_in_force() {
            params.push(("timeInForce", tif.as_binance_str().to_string()));
        }

        if let Some(price) = self.price {
            params.push(("price", price.to_string()));
        }

        params.push(("quantity", self.quantity.to_string()));
        params
    }
}
