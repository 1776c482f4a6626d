//! Demo 3: Price Chart
//!
//! Showcases: TradingView history, decimal OHLC bars
//!
//! Run: cargo run --bin price_chart

use bitkub_rest::types::server_datetime;
use bitkub_rest::{BitkubRestClient, Resolution};
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const SYMBOL: &str = "BTC_THB";
const BARS: i64 = 24;
const BAR_WIDTH: usize = 40;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  PRICE CHART".cyan().bold());
    println!("{}", format!("  Bitkub REST Demo - {} hourly closes", SYMBOL).cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitkubRestClient::from_env()?;
    let to = client.get_server_time().await?;
    let from = to - BARS * 3600;

    let history = client
        .get_history(SYMBOL, Resolution::OneHour, from, to)
        .await?;
    if !history.is_ok() {
        println!("{} no data ({})", "✗".red(), history.s);
        return Ok(());
    }

    let candles = history.candles();
    let low = candles.iter().map(|c| c.low).min().unwrap_or_default();
    let high = candles.iter().map(|c| c.high).max().unwrap_or_default();
    let range = high - low;

    for candle in &candles {
        let width = if range.is_zero() {
            0
        } else {
            ((candle.close - low) / range * Decimal::from(BAR_WIDTH as u64))
                .round()
                .to_string()
                .parse::<usize>()
                .unwrap_or(0)
        };
        let bar = "█".repeat(width);
        let bar = if candle.close >= candle.open {
            bar.green()
        } else {
            bar.red()
        };
        let time = server_datetime(candle.time)
            .map(|t| t.format("%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  {} {:>14} {}", time.dimmed(), candle.close.round_dp(2), bar);
    }

    println!();
    println!("  range {} - {}", low.round_dp(2), high.round_dp(2));
    Ok(())
}
