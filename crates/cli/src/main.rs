//! Command-line client for a Binance spot account.
//!
//! ```bash
//! export BINANCE_API_KEY=... BINANCE_SECRET_KEY=...
//!
//! spot account
//! spot balance
//! spot price btcusdt
//! spot profit BTCUSDT,ETHUSDT
//! spot order BTCUSDT BUY LIMIT 0.001 --price 30000
//! spot order BTCUSDT SELL MARKET 0.001 --test
//! spot open-orders
//! spot cancel BTCUSDT 28
//! ```

use anyhow::{Context, Result};
use auth::ApiCredentials;
use binance_rest::BinanceRestClient;
use clap::{Parser, Subcommand};
use common::ClientConfig;
use model::{NewOrder, OrderSide, OrderType};
use rust_decimal::Decimal;
use tracing::{info, warn};

mod profit;
mod views;

use profit::Profit;

#[derive(Parser)]
#[command(name = "spot")]
#[command(about = "Binance spot account, market data and order management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account permissions and commission rates
    Account,

    /// Show assets with a free balance
    Balance,

    /// Show latest and average price of a symbol
    Price {
        /// Trading pair (e.g. BTCUSDT)
        #[arg(value_parser = parse_symbol)]
        symbol: String,
    },

    /// Show 24 hour statistics of a symbol
    Ticker {
        /// Trading pair (e.g. BTCUSDT)
        #[arg(value_parser = parse_symbol)]
        symbol: String,
    },

    /// List your trades for a symbol
    Trades {
        /// Trading pair (e.g. BTCUSDT)
        #[arg(value_parser = parse_symbol)]
        symbol: String,
    },

    /// Profit statistics for one or more pairs
    Profit {
        /// Comma-separated pairs (e.g. BTCUSDT,ETHUSDT)
        #[arg(value_delimiter = ',', required = true, value_parser = parse_symbol)]
        pairs: Vec<String>,
    },

    /// Place a MARKET or LIMIT order
    Order {
        /// Trading pair (e.g. BTCUSDT)
        #[arg(value_parser = parse_symbol)]
        symbol: String,

        /// BUY or SELL
        side: OrderSide,

        /// MARKET (M) or LIMIT (L)
        order_type: OrderType,

        /// Quantity in base-asset units
        quantity: Decimal,

        /// Limit price (required for LIMIT orders)
        #[arg(long)]
        price: Option<Decimal>,

        /// Validate with the exchange without placing the order
        #[arg(long, default_value = "false")]
        test: bool,
    },

    /// List open orders
    OpenOrders,

    /// Cancel an open order
    Cancel {
        /// Trading pair (e.g. BTCUSDT)
        #[arg(value_parser = parse_symbol)]
        symbol: String,

        /// Exchange order ID
        order_id: u64,
    },
}

fn parse_symbol(s: &str) -> Result<String, String> {
    let symbol = s.trim().to_uppercase();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid symbol '{}'", s));
    }
    Ok(symbol)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    common::init_logging();

    let cli = Cli::parse();

    let credentials = ApiCredentials::from_env().context("Binance credentials are required")?;
    let config = ClientConfig::from_env().context("Invalid client configuration")?;

    info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        recv_window_ms = ?config.recv_window_ms,
        "Starting spot client"
    );

    let client = BinanceRestClient::with_config(credentials, config)?;

    run(&client, cli.command).await
}

async fn run(client: &BinanceRestClient, command: Commands) -> Result<()> {
    match command {
        Commands::Account => {
            let account = client.account().await?;
            views::account(&account);
        }
        Commands::Balance => {
            let account = client.account().await?;
            views::balance(&account);
        }
        Commands::Price { symbol } => {
            let average = client.avg_price(&symbol).await?;
            let latest = client.latest_price(&symbol).await?;
            views::price(&latest, &average);
        }
        Commands::Ticker { symbol } => {
            let ticker = client.ticker_24h(&symbol).await?;
            views::ticker_24h(&ticker);
        }
        Commands::Trades { symbol } => {
            let trades = client.my_trades(&symbol).await?;
            views::trades(&trades);
        }
        Commands::Profit { pairs } => {
            let mut profits = Vec::with_capacity(pairs.len());
            for pair in &pairs {
                let trades = client
                    .my_trades(pair)
                    .await
                    .with_context(|| format!("Failed to fetch trades for {}", pair))?;

                if trades.is_empty() {
                    warn!(symbol = %pair, "No trades for pair");
                    continue;
                }

                let average = client.avg_price(pair).await?;
                profits.extend(Profit::from_trades(&trades, average.price));
            }
            views::profit_stats(&profits);
        }
        Commands::Order {
            symbol,
            side,
            order_type,
            quantity,
            price,
            test,
        } => {
            if order_type == OrderType::Market && price.is_some() {
                warn!("Ignoring --price for a MARKET order");
            }

            let order = NewOrder::new(&symbol, side, order_type, quantity, price)?;

            if test {
                client.test_order(&order).await?;
                println!("Test order accepted: {} {} {} {}", side, order_type, quantity, symbol);
            } else {
                let placed = client.place_order(&order).await?;
                views::placed_order(&placed);
            }
        }
        Commands::OpenOrders => {
            let orders = client.open_orders().await?;
            views::open_orders(&orders);
        }
        Commands::Cancel { symbol, order_id } => {
            let order = client
                .cancel_order(&symbol, order_id)
                .await
                .with_context(|| format!("Failed to cancel order {}", order_id))?;
            views::order_summary(&order);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_symbol_uppercases() {
        assert_eq!(parse_symbol(" btcusdt ").unwrap(), "BTCUSDT");
        assert!(parse_symbol("").is_err());
        assert!(parse_symbol("BTC/USDT").is_err());
    }

    #[test]
    fn test_parse_limit_order() {
        let cli = Cli::try_parse_from([
            "spot", "order", "btcusdt", "buy", "L", "0.001", "--price", "30000",
        ])
        .unwrap();

        match cli.command {
            Commands::Order {
                symbol,
                side,
                order_type,
                quantity,
                price,
                test,
            } => {
                assert_eq!(symbol, "BTCUSDT");
                assert_eq!(side, OrderSide::Buy);
                assert_eq!(order_type, OrderType::Limit);
                assert_eq!(quantity, dec!(0.001));
                assert_eq!(price, Some(dec!(30000)));
                assert!(!test);
            }
            _ => panic!("expected order command"),
        }
    }

    #[test]
    fn test_parse_profit_pairs() {
        let cli = Cli::try_parse_from(["spot", "profit", "btcusdt,ethusdt"]).unwrap();

        match cli.command {
            Commands::Profit { pairs } => assert_eq!(pairs, vec!["BTCUSDT", "ETHUSDT"]),
            _ => panic!("expected profit command"),
        }
    }

    #[test]
    fn test_parse_cancel() {
        let cli = Cli::try_parse_from(["spot", "cancel", "BTCUSDT", "28"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cancel { ref symbol, order_id: 28 } if symbol == "BTCUSDT"
        ));
    }

    #[test]
    fn test_rejects_unknown_side() {
        assert!(Cli::try_parse_from(["spot", "order", "BTCUSDT", "HOLD", "M", "1"]).is_err());
    }
}
