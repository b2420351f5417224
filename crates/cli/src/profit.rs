//! Profit statistics computed from trade history.

use binance_rest::Trade;
use rust_decimal::Decimal;

/// Net position and value for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profit {
    pub symbol: String,
    /// Bought minus sold, in base units.
    pub qty: Decimal,
    /// Quote spent on buys minus quote received from sells.
    pub buy_value: Decimal,
    /// `qty` valued at the current average price.
    pub current_value: Decimal,
}

impl Profit {
    /// Aggregate a symbol's trades and value the net position at `avg_price`.
    ///
    /// Returns `None` when there are no trades.
    pub fn from_trades(trades: &[Trade], avg_price: Decimal) -> Option<Self> {
        let symbol = trades.first()?.symbol.clone();

        let (qty, buy_value) = trades.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(qty, value), trade| {
                if trade.is_buyer {
                    (qty + trade.qty, value + trade.quote_qty)
                } else {
                    (qty - trade.qty, value - trade.quote_qty)
                }
            },
        );

        Some(Self {
            symbol,
            qty,
            buy_value,
            current_value: avg_price * qty,
        })
    }

    /// Gain relative to current value, in percent.
    ///
    /// `None` when the position is worth nothing.
    pub fn change_percent(&self) -> Option<Decimal> {
        if self.current_value.is_zero() {
            return None;
        }
        let ratio = self.buy_value / self.current_value;
        Some((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED)
    }
}
