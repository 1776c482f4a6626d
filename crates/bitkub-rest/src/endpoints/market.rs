//! Market endpoints
//!
//! Market data (symbols, ticker, trades, order book) is public. Wallet,
//! balances and order management require authentication.

use bitkub_types::ParameterMap;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::auth::AuthenticatedClient;
use crate::error::{RestError, RestResult};
use crate::http::HttpTransport;
use crate::query::{encode_query_with, QueryFilter};
use crate::types::{ApiResponse, OrderHistoryQuery, OrderRef, OrderRequest, OrderType};

const COMPONENT: &str = "MarketEndpoints";
const PREFIX: &str = "/api/market";

/// Market data and order management
pub struct MarketEndpoints<'a> {
    transport: &'a HttpTransport,
    auth: Option<AuthenticatedClient<'a>>,
    filter: QueryFilter,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
            auth: None,
            filter: QueryFilter::default(),
        }
    }

    /// Enable the authenticated methods
    pub fn with_auth(mut self, auth: AuthenticatedClient<'a>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set how empty query parameters are dropped
    pub fn with_query_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = filter;
        self
    }

    async fn get(
        &self,
        path: &str,
        params: ParameterMap,
        method: &'static str,
    ) -> RestResult<ApiResponse> {
        let query = encode_query_with(&params, self.filter);
        self.transport
            .get_json(&format!("{}{}", PREFIX, path), &query)
            .await
            .map(ApiResponse::from_value)
            .map_err(|e| e.at(COMPONENT, method))
    }

    async fn post(
        &self,
        path: &str,
        data: ParameterMap,
        method: &'static str,
    ) -> RestResult<ApiResponse> {
        let auth = self
            .auth
            .as_ref()
            .ok_or_else(|| RestError::AuthRequired.at(COMPONENT, method))?;

        auth.post(&format!("{}{}", PREFIX, path), data)
            .await
            .map_err(|e| e.at(COMPONENT, method))
    }

    // ========================================================================
    // Public
    // ========================================================================

    /// List all available symbols
    #[instrument(skip(self))]
    pub async fn symbols(&self) -> RestResult<ApiResponse> {
        debug!("Fetching symbols");
        self.get("/symbols", ParameterMap::new(), "symbols").await
    }

    /// Get ticker information, for one symbol or all of them
    #[instrument(skip(self))]
    pub async fn ticker(&self, sym: Option<&str>) -> RestResult<ApiResponse> {
        debug!("Fetching ticker");
        let params = ParameterMap::new().with_opt("sym", sym);
        self.get("/ticker", params, "ticker").await
    }

    /// List recent trades
    #[instrument(skip(self))]
    pub async fn trades(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.get("/trades", symbol_limit(sym, lmt), "trades").await
    }

    /// List open buy orders
    #[instrument(skip(self))]
    pub async fn bids(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.get("/bids", symbol_limit(sym, lmt), "bids").await
    }

    /// List open sell orders
    #[instrument(skip(self))]
    pub async fn asks(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.get("/asks", symbol_limit(sym, lmt), "asks").await
    }

    /// List all open orders
    #[instrument(skip(self))]
    pub async fn books(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.get("/books", symbol_limit(sym, lmt), "books").await
    }

    /// Get depth information
    ///
    /// # Arguments
    /// * `sym` - Symbol, e.g. `THB_BTC`
    /// * `lmt` - Depth size
    #[instrument(skip(self))]
    pub async fn depth(&self, sym: &str, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.get("/depth", symbol_limit(sym, lmt), "depth").await
    }

    // ========================================================================
    // Authenticated
    // ========================================================================

    /// Get available balances
    ///
    /// Use [`balances`](Self::balances) for available and reserved amounts.
    #[instrument(skip(self))]
    pub async fn wallet(&self) -> RestResult<ApiResponse> {
        self.post("/wallet", ParameterMap::new(), "wallet").await
    }

    /// Get available and reserved balances
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<ApiResponse> {
        self.post("/balances", ParameterMap::new(), "balances").await
    }

    /// Create a buy order
    ///
    /// `amt` is the amount to spend. For a market order, `rat` must be 0.
    #[instrument(skip(self, order), fields(sym = %order.sym, typ = %order.typ))]
    pub async fn place_bid(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.post("/place-bid", order.to_params(), "place_bid").await
    }

    /// Validate a buy order without deducting balance
    #[instrument(skip(self, order), fields(sym = %order.sym, typ = %order.typ))]
    pub async fn place_bid_test(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.post("/place-bid/test", order.to_params(), "place_bid_test")
            .await
    }

    /// Create a sell order
    ///
    /// `amt` is the amount of cryptocurrency to sell.
    #[instrument(skip(self, order), fields(sym = %order.sym, typ = %order.typ))]
    pub async fn place_ask(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.post("/place-ask", order.to_params(), "place_ask").await
    }

    /// Validate a sell order without deducting balance
    #[instrument(skip(self, order), fields(sym = %order.sym, typ = %order.typ))]
    pub async fn place_ask_test(&self, order: &OrderRequest) -> RestResult<ApiResponse> {
        self.post("/place-ask/test", order.to_params(), "place_ask_test")
            .await
    }

    /// Create a sell order for a fiat amount to receive
    ///
    /// The crypto amount is computed by the exchange. Market orders use the
    /// current highest bid as the rate.
    #[instrument(skip(self))]
    pub async fn place_ask_by_fiat(
        &self,
        sym: &str,
        amt: Decimal,
        rat: Decimal,
        typ: OrderType,
    ) -> RestResult<ApiResponse> {
        let data = ParameterMap::new()
            .with("sym", sym)
            .with("amt", amt)
            .with("rat", rat)
            .with("typ", typ.to_string());
        self.post("/place-ask-by-fiat", data, "place_ask_by_fiat")
            .await
    }

    /// Cancel an open order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order: &OrderRef) -> RestResult<ApiResponse> {
        self.post("/cancel-order", order.to_params(), "cancel_order")
            .await
    }

    /// List open orders for a symbol
    #[instrument(skip(self))]
    pub async fn my_open_orders(&self, sym: &str) -> RestResult<ApiResponse> {
        let data = ParameterMap::new().with("sym", sym);
        self.post("/my-open-orders", data, "my_open_orders").await
    }

    /// List matched orders
    #[instrument(skip(self, query), fields(sym = %query.sym))]
    pub async fn my_order_history(&self, query: &OrderHistoryQuery) -> RestResult<ApiResponse> {
        self.post("/my-order-history", query.to_params(), "my_order_history")
            .await
    }

    /// Get details of one order
    #[instrument(skip(self))]
    pub async fn order_info(&self, order: &OrderRef) -> RestResult<ApiResponse> {
        self.post("/order-info", order.to_params(), "order_info")
            .await
    }

    /// Get a token for WebSocket authentication
    #[instrument(skip(self))]
    pub async fn ws_token(&self) -> RestResult<ApiResponse> {
        self.post("/wstoken", ParameterMap::new(), "ws_token").await
    }
}

fn symbol_limit(sym: &str, lmt: Option<u32>) -> ParameterMap {
    ParameterMap::new().with("sym", sym).with_opt("lmt", lmt)
}
