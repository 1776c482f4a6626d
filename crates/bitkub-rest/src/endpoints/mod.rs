//! API endpoint implementations

pub mod crypto;
pub mod fiat;
pub mod market;
pub mod server;
pub mod trading_view;
pub mod user;

pub use crypto::CryptoEndpoints;
pub use fiat::FiatEndpoints;
pub use market::MarketEndpoints;
pub use server::ServerEndpoints;
pub use trading_view::TradingViewEndpoints;
pub use user::UserEndpoints;
