//! Demo 1: Public Endpoints
//!
//! Showcases: server status, server time and every public market endpoint
//!
//! Run: cargo run --bin public_endpoints

use bitkub_rest::types::server_datetime;
use bitkub_rest::{ApiResponse, BitkubRestClient, RestResult};
use colored::*;
use tracing_subscriber::EnvFilter;

const SYMBOL: &str = "THB_BTC";
const LIMIT: u32 = 10;

fn print_response(label: &str, response: RestResult<ApiResponse>) {
    match response {
        Ok(resp) if resp.is_success() => {
            let body = serde_json::to_string(&resp).unwrap_or_default();
            let preview: String = body.chars().take(100).collect();
            println!("  {} {:<8} {}", "✓".green(), label.cyan(), preview.dimmed());
        }
        Ok(resp) => {
            let msg = resp
                .exchange_error()
                .map(|e| e.to_string())
                .unwrap_or_default();
            println!("  {} {:<8} {}", "!".yellow(), label.cyan(), msg.yellow());
        }
        Err(e) => println!("  {} {:<8} {}", "✗".red(), label.cyan(), e.to_string().red()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  PUBLIC ENDPOINTS".cyan().bold());
    println!("{}", "  Bitkub REST Demo - Non-secure endpoints".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitkubRestClient::from_env()?;

    println!("{}", "Server".white().bold());
    for status in client.get_status().await? {
        let marker = if status.is_ok() { "✓".green() } else { "✗".red() };
        println!("  {} {:<24} {}", marker, status.name, status.status);
    }

    let ts = client.get_server_time().await?;
    let time = server_datetime(ts)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string());
    println!("  {} server time {}", "✓".green(), time);
    println!();

    println!("{} {}", "Market".white().bold(), SYMBOL.cyan());
    let market = client.market();
    print_response("symbols", market.symbols().await);
    print_response("ticker", market.ticker(Some(SYMBOL)).await);
    print_response("trades", market.trades(SYMBOL, Some(LIMIT)).await);
    print_response("bids", market.bids(SYMBOL, Some(LIMIT)).await);
    print_response("asks", market.asks(SYMBOL, Some(LIMIT)).await);
    print_response("books", market.books(SYMBOL, Some(LIMIT)).await);
    print_response("depth", market.depth(SYMBOL, Some(LIMIT)).await);

    println!();
    println!("{}", "Done.".green().bold());
    Ok(())
}
