//! HTTP transport
//!
//! Thin layer over `reqwest` that knows the base URL, the Bitkub header set,
//! and how to turn a response into JSON or a [`RestError`].

use bitkub_auth::SignedPayload;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

/// Header carrying the API key on authenticated requests
pub const API_KEY_HEADER: &str = "X-BTK-APIKEY";

const JSON_MIME: &str = "application/json";

/// Shared HTTP client bound to one exchange base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path` plus an already-encoded query string
    pub fn url(&self, path: &str, query: &str) -> String {
        format!("{}{}{}", self.base_url, path, query)
    }

    /// GET `path` + `query` and decode the body as `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &str) -> RestResult<T> {
        let url = self.url(path, query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, JSON_MIME)
            .send()
            .await
            .map_err(map_send_error)?;

        decode(check_status(response).await?).await
    }

    /// GET `path` + `query` and return the raw JSON body
    pub async fn get_json(&self, path: &str, query: &str) -> RestResult<Value> {
        self.get(path, query).await
    }

    /// POST a signed payload to `path`
    ///
    /// The body is exactly [`SignedPayload::to_json`], the same bytes the
    /// signature was computed over plus the trailing `sig`.
    pub async fn post_signed(
        &self,
        path: &str,
        payload: &SignedPayload,
        api_key: &str,
    ) -> RestResult<Value> {
        let url = self.url(path, "");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(API_KEY_HEADER, api_key)
            .body(payload.to_json())
            .send()
            .await
            .map_err(map_send_error)?;

        decode(check_status(response).await?).await
    }
}

fn map_send_error(e: reqwest::Error) -> RestError {
    if e.is_timeout() {
        RestError::Timeout
    } else {
        RestError::Http(e)
    }
}

async fn check_status(response: Response) -> RestResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "Exchange returned error status");
    Err(RestError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> RestResult<T> {
    let text = response.text().await.map_err(map_send_error)?;
    serde_json::from_str(&text).map_err(|e| RestError::Parse(format!("{}: {}", e, text)))
}
