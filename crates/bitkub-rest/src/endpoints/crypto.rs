//! Crypto funding endpoints
//!
//! These endpoints require authentication.

use bitkub_types::ParameterMap;
use tracing::{debug, instrument};

use crate::auth::AuthenticatedClient;
use crate::error::RestResult;
use crate::types::{page_params, ApiResponse, CryptoWithdrawal};

const COMPONENT: &str = "CryptoEndpoints";

/// Deposit addresses, crypto withdrawals and history
pub struct CryptoEndpoints<'a> {
    auth: AuthenticatedClient<'a>,
}

impl<'a> CryptoEndpoints<'a> {
    pub fn new(auth: AuthenticatedClient<'a>) -> Self {
        Self { auth }
    }

    async fn post(
        &self,
        path: &str,
        data: ParameterMap,
        method: &'static str,
    ) -> RestResult<ApiResponse> {
        self.auth
            .post(&format!("/api/crypto{}", path), data)
            .await
            .map_err(|e| e.at(COMPONENT, method))
    }

    /// List deposit addresses
    #[instrument(skip(self))]
    pub async fn addresses(&self, p: Option<u32>, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.post("/addresses", page_params(p, lmt), "addresses").await
    }

    /// Withdraw to a trusted external address
    #[instrument(skip(self, request), fields(cur = %request.cur))]
    pub async fn withdraw(&self, request: &CryptoWithdrawal) -> RestResult<ApiResponse> {
        debug!("Requesting crypto withdrawal");
        self.post("/withdraw", request.to_params(), "withdraw").await
    }

    /// Withdraw to another account on the exchange
    #[instrument(skip(self, request), fields(cur = %request.cur))]
    pub async fn internal_withdraw(&self, request: &CryptoWithdrawal) -> RestResult<ApiResponse> {
        debug!("Requesting internal withdrawal");
        self.post("/internal-withdraw", request.to_params(), "internal_withdraw")
            .await
    }

    /// List crypto deposits
    #[instrument(skip(self))]
    pub async fn deposit_history(
        &self,
        p: Option<u32>,
        lmt: Option<u32>,
    ) -> RestResult<ApiResponse> {
        self.post("/deposit-history", page_params(p, lmt), "deposit_history")
            .await
    }

    /// List crypto withdrawals
    #[instrument(skip(self))]
    pub async fn withdraw_history(
        &self,
        p: Option<u32>,
        lmt: Option<u32>,
    ) -> RestResult<ApiResponse> {
        self.post("/withdraw-history", page_params(p, lmt), "withdraw_history")
            .await
    }

    /// Generate a new deposit address for `sym`, e.g. `THB_BTC`
    #[instrument(skip(self))]
    pub async fn generate_address(&self, sym: &str) -> RestResult<ApiResponse> {
        let data = ParameterMap::new().with("sym", sym);
        self.post("/generate-address", data, "generate_address")
            .await
    }
}
