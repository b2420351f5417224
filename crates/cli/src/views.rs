//! Plain-text rendering of API results.

use crate::profit::Profit;
use binance_rest::{Account, AvgPrice, Order, Ticker, Ticker24h, Trade};

const RULE: &str = "------------------------------";

pub fn account(account: &Account) {
    println!("Account info ({})", account.account_type);
    println!("PERMISSIONS");
    println!("  Can trade   : {}", account.can_trade);
    println!("  Can deposit : {}", account.can_deposit);
    println!("  Can withdraw: {}", account.can_withdraw);
    println!("FEES");
    println!("  Maker commission : {}", account.maker_commission);
    println!("  Taker commission : {}", account.taker_commission);
    println!("  Buyer commission : {}", account.buyer_commission);
    println!("  Seller commission: {}", account.seller_commission);
    println!("{RULE}");
}

pub fn balance(account: &Account) {
    println!("Current balance:");
    let mut any = false;
    for balance in account.non_zero_balances() {
        any = true;
        println!("{}: {} (locked {})", balance.asset, balance.free, balance.locked);
    }
    if !any {
        println!("No assets with a free balance.");
    }
    println!("{RULE}");
}

pub fn price(latest: &Ticker, average: &AvgPrice) {
    println!("{}", latest.symbol);
    println!(" * Latest Price: {}", latest.price);
    println!(" * Average {}min: {}", average.mins, average.price);
    println!("{RULE}");
}

pub fn ticker_24h(ticker: &Ticker24h) {
    println!("{} (24h)", ticker.symbol);
    println!(" * Last   : {}", ticker.last_price);
    println!(
        " * Change : {} ({}%)",
        ticker.price_change, ticker.price_change_percent
    );
    println!(" * High   : {}", ticker.high_price);
    println!(" * Low    : {}", ticker.low_price);
    println!(" * Volume : {}", ticker.volume);
    println!(" * Trades : {}", ticker.count);
    println!("{RULE}");
}

pub fn trades(trades: &[Trade]) {
    if trades.is_empty() {
        println!("No trades found!");
        return;
    }
    println!("Time          | Side | Price | Qty | Quote | Fee");
    for trade in trades {
        let side = if trade.is_buyer { "BUY" } else { "SELL" };
        println!(
            "{} | {} | {} | {} | {} | {} {}",
            trade.time,
            side,
            trade.price,
            trade.qty,
            trade.quote_qty,
            trade.commission,
            trade.commission_asset
        );
    }
}

pub fn profit_stats(profits: &[Profit]) {
    if profits.is_empty() {
        println!("No trades found!");
        return;
    }
    println!("Symbol | Qty | Buy value | Current value | Profit %");
    for item in profits {
        let change = item
            .change_percent()
            .map(|p| p.round_dp(2).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            item.symbol,
            item.qty.round_dp(8),
            item.buy_value.round_dp(2),
            item.current_value.round_dp(2),
            change
        );
    }
}

pub fn placed_order(order: &Order) {
    println!("{RULE}");
    println!("Order ID: {}", order.order_id);
    println!("Status: {}", order.status);
    println!("Executed Qty: {}", order.executed_qty);
    for fill in &order.fills {
        println!(" * Price: {}", fill.price);
        println!(" * Quantity: {}", fill.qty);
        println!(" * Fee ({}): {}", fill.commission_asset, fill.commission);
        println!("{RULE}");
    }
}

pub fn order_summary(order: &Order) {
    println!("{RULE}");
    println!("Order ID: {}", order.order_id);
    println!("Symbol  : {}", order.symbol);
    println!("Side    : {}", order.side);
    println!("Type    : {}", order.order_type);
    println!("Price   : {}", order.price);
    match order.orig_qty {
        Some(qty) => println!("Orig Qty: {}", qty),
        None => println!("Orig Qty: -"),
    }
    println!("Exec Qty: {}", order.executed_qty);
    println!("Status  : {}", order.status);
}

pub fn open_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("There are no open orders!");
        return;
    }
    for order in orders {
        order_summary(order);
    }
}
