//! Server status endpoints
//!
//! These endpoints don't require authentication.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{RestError, RestResult};
use crate::http::HttpTransport;
use crate::payload::ServerClock;
use crate::types::EndpointStatus;

const COMPONENT: &str = "ServerEndpoints";

/// Server status and clock
pub struct ServerEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> ServerEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get endpoint status
    ///
    /// When a status is not `ok`, wait until it changes back before trading.
    #[instrument(skip(self))]
    pub async fn get_status(&self) -> RestResult<Vec<EndpointStatus>> {
        debug!("Fetching endpoint status");

        self.transport
            .get("/api/status", "")
            .await
            .map_err(|e| e.at(COMPONENT, "get_status"))
    }

    /// Get server timestamp
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<i64> {
        debug!("Fetching server time");

        let body = self
            .transport
            .get_json("/api/servertime", "")
            .await
            .map_err(|e| e.at(COMPONENT, "get_server_time"))?;

        parse_server_time(&body).map_err(|e| e.at(COMPONENT, "get_server_time"))
    }
}

#[async_trait]
impl<'a> ServerClock for ServerEndpoints<'a> {
    async fn server_time(&self) -> RestResult<i64> {
        self.get_server_time().await
    }
}

fn parse_server_time(body: &Value) -> RestResult<i64> {
    let ts = match body {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    ts.ok_or_else(|| RestError::Parse(format!("Unexpected server time: {}", body)))
}
