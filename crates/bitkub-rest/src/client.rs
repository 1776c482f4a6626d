//! Main REST client implementation

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use tracing::info;

use crate::auth::{AuthenticatedClient, Credentials, ExchangeClock};
use crate::config::{normalize_base_url, BitkubConfig, DEFAULT_BASE_URL};
use crate::endpoints::{
    CryptoEndpoints, FiatEndpoints, MarketEndpoints, ServerEndpoints, TradingViewEndpoints,
    UserEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::http::HttpTransport;
use crate::payload::ServerClock;
use crate::query::QueryFilter;
use crate::types::{
    ApiResponse, EndpointStatus, OrderRef, OrderRequest, Resolution, TradingViewHistory,
};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("bitkub-rest/", env!("CARGO_PKG_VERSION"));

/// Bitkub REST API client
///
/// Provides access to both public and authenticated endpoints.
///
/// # Example
///
/// ```no_run
/// use bitkub_rest::{BitkubRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitkubRestClient::new()?;
///     let ticker = client.get_ticker(Some("THB_BTC")).await?;
///
///     // With authentication for wallet and trading endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitkubRestClient::with_credentials(creds)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitkubRestClient {
    transport: HttpTransport,
    credentials: Option<Credentials>,
    clock: Arc<dyn ServerClock>,
    query_filter: QueryFilter,
}

impl BitkubRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client from `BITKUB_URL`, `BITKUB_API_KEY` and `BITKUB_API_SECRET`
    ///
    /// A `.env` file is loaded first if present. Without key and secret the
    /// client is public-only; with only one of them this fails.
    pub fn from_env() -> RestResult<Self> {
        let config = BitkubConfig::from_env_file();
        Self::with_config(ClientConfig::try_from(&config)?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|e| RestError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let transport = HttpTransport::new(http_client, config.base_url);
        let clock = Arc::new(ExchangeClock::new(transport.clone()));

        info!(
            base_url = transport.base_url(),
            authenticated = config.credentials.is_some(),
            "Created Bitkub REST client"
        );

        Ok(Self {
            transport,
            credentials: config.credentials,
            clock,
            query_filter: config.query_filter,
        })
    }

    /// Replace the server clock used to timestamp signed requests
    pub fn with_clock(mut self, clock: Arc<dyn ServerClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Check if the client has credentials for authenticated endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Signing context for authenticated endpoints (requires credentials)
    pub fn authenticated(&self) -> RestResult<AuthenticatedClient<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AuthenticatedClient::new(
            &self.transport,
            creds,
            self.clock.as_ref(),
        ))
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// Get server endpoints
    pub fn server(&self) -> ServerEndpoints<'_> {
        ServerEndpoints::new(&self.transport)
    }

    /// Get endpoint status
    pub async fn get_status(&self) -> RestResult<Vec<EndpointStatus>> {
        self.server().get_status().await
    }

    /// Get server timestamp
    pub async fn get_server_time(&self) -> RestResult<i64> {
        self.server().get_server_time().await
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    ///
    /// Authenticated market methods return [`RestError::AuthRequired`] when
    /// the client has no credentials.
    pub fn market(&self) -> MarketEndpoints<'_> {
        let market = MarketEndpoints::new(&self.transport).with_query_filter(self.query_filter);
        match self.authenticated() {
            Ok(auth) => market.with_auth(auth),
            Err(_) => market,
        }
    }

    /// Get ticker information, for one symbol or all of them
    pub async fn get_ticker(&self, sym: Option<&str>) -> RestResult<ApiResponse> {
        self.market().ticker(sym).await
    }

    /// Get depth information for a symbol
    pub async fn get_depth(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.market().depth(sym, lmt).await
    }

    /// Get available and reserved balances
    pub async fn get_balances(&self) -> RestResult<ApiResponse> {
        self.market().balances().await
    }

    /// Create a buy order
    pub async fn place_bid(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.market().place_bid(order).await
    }

    /// Create a sell order
    pub async fn place_ask(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.market().place_ask(order).await
    }

    /// Cancel an open order
    pub async fn cancel_order(&self, order: &OrderRef) -> RestResult<ApiResponse> {
        self.market().cancel_order(order).await
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get user endpoints (requires credentials)
    pub fn user(&self) -> RestResult<UserEndpoints<'_>> {
        Ok(UserEndpoints::new(self.authenticated()?))
    }

    /// Get fiat endpoints (requires credentials)
    pub fn fiat(&self) -> RestResult<FiatEndpoints<'_>> {
        Ok(FiatEndpoints::new(self.authenticated()?))
    }

    /// Withdraw fiat to an approved bank account
    pub async fn withdraw_fiat(&self, id: &str, amt: Decimal) -> RestResult<ApiResponse> {
        self.fiat()?.withdraw(id, amt).await
    }

    /// Get crypto endpoints (requires credentials)
    pub fn crypto(&self) -> RestResult<CryptoEndpoints<'_>> {
        Ok(CryptoEndpoints::new(self.authenticated()?))
    }

    // ========================================================================
    // TradingView Endpoints
    // ========================================================================

    /// Get chart endpoints
    pub fn trading_view(&self) -> TradingViewEndpoints<'_> {
        TradingViewEndpoints::new(&self.transport).with_query_filter(self.query_filter)
    }

    /// Get OHLCV bars for a symbol
    pub async fn get_history(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> RestResult<TradingViewHistory> {
        self.trading_view()
            .history(symbol, resolution, from, to)
            .await
    }
}

impl std::fmt::Debug for BitkubRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitkubRestClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .field("query_filter", &self.query_filter)
            .finish()
    }
}

/// Run `fut`, failing with [`RestError::Timeout`] if it outlives `deadline`
///
/// The future is dropped on expiry, which cancels any in-flight request.
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> RestResult<T>
where
    F: Future<Output = RestResult<T>>,
{
    tokio::time::timeout(deadline, fut)
        .await
        .map_err(|_| RestError::Timeout)?
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Exchange base URL
    pub base_url: String,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Query string filtering for public GETs
    pub query_filter: QueryFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            query_filter: QueryFilter::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set query filtering mode
    pub fn with_query_filter(mut self, filter: QueryFilter) -> Self {
        self.query_filter = filter;
        self
    }
}

impl TryFrom<&BitkubConfig> for ClientConfig {
    type Error = RestError;

    fn try_from(config: &BitkubConfig) -> RestResult<Self> {
        let mut client_config = ClientConfig::new().with_base_url(config.base_url.clone());
        client_config.credentials = config.credentials()?;
        Ok(client_config)
    }
}
