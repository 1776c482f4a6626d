//! Demo 2: Account Overview
//!
//! Showcases: signed requests, balances, open orders and a test order
//!
//! Requires BITKUB_API_KEY and BITKUB_API_SECRET (a .env file works too).
//!
//! Run: cargo run --bin account_overview

use std::collections::BTreeMap;
use std::time::Duration;

use bitkub_rest::{with_deadline, BitkubRestClient, OrderRequest, OrderType};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const SYMBOL: &str = "THB_BTC";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "  Bitkub REST Demo - Secure endpoints".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitkubRestClient::from_env()?;
    if !client.has_credentials() {
        println!(
            "{} Set BITKUB_API_KEY and BITKUB_API_SECRET to run this demo",
            "✗".red()
        );
        return Ok(());
    }

    // Balances
    let balances = with_deadline(Duration::from_secs(10), client.get_balances()).await?;
    if let Some(err) = balances.exchange_error() {
        println!("{} balances: {}", "✗".red(), err);
        return Ok(());
    }

    let rows: BTreeMap<String, Value> = balances.result_as()?.unwrap_or_default();
    println!(
        "  {:<8} {:>20} {:>20}",
        "ASSET".white().bold(),
        "AVAILABLE".white().bold(),
        "RESERVED".white().bold()
    );
    println!("  {}", "─".repeat(50));
    for (asset, row) in &rows {
        let available = decimal_field(row, "available");
        let reserved = decimal_field(row, "reserved");
        if available.is_zero() && reserved.is_zero() {
            continue;
        }
        println!("  {:<8} {:>20} {:>20}", asset.cyan(), available, reserved);
    }
    println!();

    // Open orders
    let open = client.market().my_open_orders(SYMBOL).await?;
    let count = open
        .result
        .as_ref()
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    println!("  {} open orders on {}: {}", "✓".green(), SYMBOL.cyan(), count);

    // Validate an order without placing it
    let order = OrderRequest::builder()
        .sym(SYMBOL)
        .amt(dec!(100))
        .typ(OrderType::Market)
        .build();
    let test = client.market().place_bid_test(&order).await?;
    match test.exchange_error() {
        None => println!("  {} test market bid for 100 THB accepted", "✓".green()),
        Some(err) => println!("  {} test market bid rejected: {}", "!".yellow(), err),
    }

    // Limits
    let limits = client.user()?.limits().await?;
    if let Some(result) = limits.result {
        println!("  {} limits: {}", "✓".green(), result.to_string().dimmed());
    }

    println!();
    println!("{}", "Done.".green().bold());
    Ok(())
}

fn decimal_field(row: &Value, key: &str) -> Decimal {
    match row.get(key) {
        Some(Value::String(s)) => s.parse().unwrap_or_default(),
        Some(other) => other.to_string().parse().unwrap_or_default(),
        None => Decimal::ZERO,
    }
}
