//! Fiat funding endpoints
//!
//! These endpoints require authentication.

use bitkub_types::ParameterMap;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::auth::AuthenticatedClient;
use crate::error::RestResult;
use crate::types::{page_params, ApiResponse};

const COMPONENT: &str = "FiatEndpoints";

/// Bank accounts, fiat withdrawals and history
pub struct FiatEndpoints<'a> {
    auth: AuthenticatedClient<'a>,
}

impl<'a> FiatEndpoints<'a> {
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
            .post(&format!("/api/fiat{}", path), data)
            .await
            .map_err(|e| e.at(COMPONENT, method))
    }

    /// List approved bank accounts
    #[instrument(skip(self))]
    pub async fn accounts(&self, p: Option<u32>, lmt: Option<u32>) -> RestResult<ApiResponse> {
        self.post("/accounts", page_params(p, lmt), "accounts").await
    }

    /// Withdraw to an approved bank account
    ///
    /// # Arguments
    /// * `id` - Bank account id
    /// * `amt` - Amount to withdraw
    #[instrument(skip(self))]
    pub async fn withdraw(&self, id: &str, amt: Decimal) -> RestResult<ApiResponse> {
        debug!("Requesting fiat withdrawal");
        let data = ParameterMap::new().with("id", id).with("amt", amt);
        self.post("/withdraw", data, "withdraw").await
    }

    /// List fiat deposits
    #[instrument(skip(self))]
    pub async fn deposit_history(
        &self,
        p: Option<u32>,
        lmt: Option<u32>,
    ) -> RestResult<ApiResponse> {
        self.post("/deposit-history", page_params(p, lmt), "deposit_history")
            .await
    }

    /// List fiat withdrawals
    #[instrument(skip(self))]
    pub async fn withdraw_history(
        &self,
        p: Option<u32>,
        lmt: Option<u32>,
    ) -> RestResult<ApiResponse> {
        self.post("/withdraw-history", page_params(p, lmt), "withdraw_history")
            .await
    }
}
