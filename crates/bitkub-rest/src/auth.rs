//! Authenticated request path
//!
//! [`AuthenticatedClient`] bundles what every signed call needs (transport,
//! credentials, server clock) and is handed to endpoint groups by the client.

use async_trait::async_trait;
use bitkub_types::ParameterMap;
use tracing::debug;

use crate::endpoints::ServerEndpoints;
use crate::error::RestResult;
use crate::http::HttpTransport;
use crate::payload::{prepare_authenticated_payload, ServerClock};
use crate::types::ApiResponse;

pub use bitkub_auth::Credentials;

/// Signs and sends authenticated POST requests
#[derive(Clone, Copy)]
pub struct AuthenticatedClient<'a> {
    transport: &'a HttpTransport,
    credentials: &'a Credentials,
    clock: &'a dyn ServerClock,
}

impl<'a> AuthenticatedClient<'a> {
    pub fn new(
        transport: &'a HttpTransport,
        credentials: &'a Credentials,
        clock: &'a dyn ServerClock,
    ) -> Self {
        Self {
            transport,
            credentials,
            clock,
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Fetch server time, sign `data` and POST it to `path`
    pub async fn post(&self, path: &str, data: ParameterMap) -> RestResult<ApiResponse> {
        let signed = prepare_authenticated_payload(self.clock, self.credentials, data).await?;
        debug!(path, ts = ?signed.ts(), "Sending signed request");

        let body = self
            .transport
            .post_signed(path, &signed, self.credentials.api_key())
            .await?;

        Ok(ApiResponse::from_value(body))
    }
}

impl std::fmt::Debug for AuthenticatedClient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.transport.base_url())
            .field("credentials", self.credentials)
            .finish()
    }
}

/// Server clock backed by `GET /api/servertime`
#[derive(Debug, Clone)]
pub struct ExchangeClock {
    transport: HttpTransport,
}

impl ExchangeClock {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ServerClock for ExchangeClock {
    async fn server_time(&self) -> RestResult<i64> {
        ServerEndpoints::new(&self.transport).get_server_time().await
    }
}
