//! User account endpoints
//!
//! These endpoints require authentication.

use bitkub_types::ParameterMap;
use tracing::instrument;

use crate::auth::AuthenticatedClient;
use crate::error::RestResult;
use crate::types::ApiResponse;

const COMPONENT: &str = "UserEndpoints";

/// Account limits and credits
pub struct UserEndpoints<'a> {
    auth: AuthenticatedClient<'a>,
}

impl<'a> UserEndpoints<'a> {
    pub fn new(auth: AuthenticatedClient<'a>) -> Self {
        Self { auth }
    }

    /// Get deposit and withdrawal limits with current usage
    #[instrument(skip(self))]
    pub async fn limits(&self) -> RestResult<ApiResponse> {
        self.auth
            .post("/api/user/limits", ParameterMap::new())
            .await
            .map_err(|e| e.at(COMPONENT, "limits"))
    }

    /// Get trading credit balance
    #[instrument(skip(self))]
    pub async fn trading_credits(&self) -> RestResult<ApiResponse> {
        self.auth
            .post("/api/user/trading-credits", ParameterMap::new())
            .await
            .map_err(|e| e.at(COMPONENT, "trading_credits"))
    }
}
