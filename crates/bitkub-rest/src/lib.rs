//! REST API client for the Bitkub cryptocurrency exchange
//!
//! This crate provides a REST client for Bitkub, covering market data,
//! wallet and order management, fiat and crypto funding, and chart history.
//!
//! # Features
//!
//! - **Server**: Endpoint status, server time
//! - **Market**: Symbols, ticker, trades, order book, depth
//! - **Trading**: Place, test, cancel and look up orders; WebSocket token
//! - **Account**: Wallet, balances, limits, trading credits
//! - **Funding**: Fiat and crypto deposits, withdrawals, addresses
//! - **TradingView**: OHLCV history
//!
//! # Authentication
//!
//! Authenticated endpoints are POSTs whose JSON body carries the exchange's
//! own timestamp (`ts`) and an HMAC-SHA256 signature (`sig`) over the rest of
//! the body. The client fetches `GET /api/servertime` before every signed
//! call; if that fails, nothing is sent.
//!
//! # Example
//!
//! ```no_run
//! use bitkub_rest::{BitkubRestClient, OrderRequest, OrderType};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads BITKUB_URL, BITKUB_API_KEY and BITKUB_API_SECRET
//!     let client = BitkubRestClient::from_env()?;
//!
//!     let ticker = client.get_ticker(Some("THB_BTC")).await?;
//!     println!("Ticker: {:?}", ticker.extra);
//!
//!     let order = OrderRequest::builder()
//!         .sym("THB_BTC")
//!         .amt(Decimal::new(100, 0))
//!         .typ(OrderType::Market)
//!         .build();
//!     let response = client.market().place_bid_test(&order).await?;
//!     if let Some(err) = response.exchange_error() {
//!         println!("Rejected: {}", err);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Transport, signing and decoding failures are [`RestError`]s, tagged with
//! the endpoint group and method that raised them. Business errors reported
//! by the exchange (`{"error": 18}`) are not failures; they come back on
//! [`ApiResponse`] with a resolved `errorMsg`.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod payload;
pub mod query;
pub mod types;

// Re-export main types
pub use auth::{AuthenticatedClient, Credentials, ExchangeClock};
pub use client::{with_deadline, BitkubRestClient, ClientConfig};
pub use config::BitkubConfig;
pub use error::{ErrorKind, RestError, RestResult};
pub use payload::{prepare_authenticated_payload, ServerClock};
pub use query::{encode_query, encode_query_with, QueryFilter};

// Re-export endpoint-specific types
pub use types::{
    // Responses
    ApiResponse, ExchangeError,
    // Server
    EndpointStatus,
    // Trading
    OrderHistoryQuery, OrderRef, OrderRequest, OrderSide, OrderType,
    // Funding
    CryptoWithdrawal,
    // TradingView
    Candle, Resolution, TradingViewHistory,
};

pub use bitkub_types::{BitkubErrorCode, ParamValue, ParameterMap};
