//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitkub_rest::{BitkubRestClient, ClientConfig, Credentials};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "secret123";
pub const SERVER_TS: i64 = 1700000000;

/// Credentials whose secret matches the known signature vectors.
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("valid test credentials")
}

/// Public-only client pointing at a mock server.
pub fn public_client(server: &MockServer) -> BitkubRestClient {
    BitkubRestClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client builds")
}

/// Authenticated client pointing at a mock server.
pub fn authenticated_client(server: &MockServer) -> BitkubRestClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_credentials(test_credentials());
    BitkubRestClient::with_config(config).expect("client builds")
}

/// Mount `GET /api/servertime` returning [`SERVER_TS`].
pub async fn mount_server_time(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/servertime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(SERVER_TS)))
        .mount(server)
        .await;
}

/// Body of the only request received for `request_path`.
pub async fn received_body(server: &MockServer, request_path: &str) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    let matching: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == request_path)
        .collect();
    assert_eq!(matching.len(), 1, "expected one request to {}", request_path);
    String::from_utf8(matching[0].body.clone()).expect("utf-8 body")
}

/// Query string of the only request received for `request_path`.
pub async fn received_query(server: &MockServer, request_path: &str) -> Option<String> {
    let requests = server.received_requests().await.expect("recording enabled");
    let matching: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == request_path)
        .collect();
    assert_eq!(matching.len(), 1, "expected one request to {}", request_path);
    matching[0].url.query().map(str::to_string)
}
