//! Integration tests for public endpoints.
//!
//! Server status, market data and chart history against wiremock mock servers.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitkub_rest::{
    BitkubRestClient, ClientConfig, ErrorKind, QueryFilter, RestError, Resolution,
};
use common::*;

// ============================================================================
// TEST: SERVER
// ============================================================================

#[tokio::test]
async fn test_get_server_time() {
    let server = MockServer::start().await;
    mount_server_time(&server).await;

    let client = public_client(&server);
    let ts = client.get_server_time().await.unwrap();

    assert_eq!(ts, SERVER_TS);
}

#[tokio::test]
async fn test_get_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Non-secure endpoints", "status": "ok", "message": ""},
            {"name": "Secure endpoints", "status": "ok", "message": ""}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let statuses = client.get_status().await.unwrap();

    assert_eq!(statuses.len(), 2);
    assert!(statuses.iter().all(|s| s.is_ok()));
}

// ============================================================================
// TEST: MARKET
// ============================================================================

#[tokio::test]
async fn test_ticker_with_symbol() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/ticker"))
        .and(query_param("sym", "THB_BTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "THB_BTC": {"id": 1, "last": 1200000, "lowestAsk": 1200100}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let ticker = client.get_ticker(Some("THB_BTC")).await.unwrap();

    assert!(ticker.is_success());
    assert_eq!(ticker.extra["THB_BTC"]["last"], 1200000);
    assert_eq!(
        received_query(&server, "/api/market/ticker").await.as_deref(),
        Some("sym=THB_BTC")
    );
}

#[tokio::test]
async fn test_ticker_without_symbol_has_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    client.get_ticker(None).await.unwrap();

    assert_eq!(received_query(&server, "/api/market/ticker").await, None);
}

#[tokio::test]
async fn test_symbols_attaches_error_msg() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": 0,
            "result": [{"id": 1, "symbol": "THB_BTC", "info": "Thai Baht to Bitcoin"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let symbols = client.market().symbols().await.unwrap();

    assert_eq!(symbols.error, Some(0));
    assert_eq!(symbols.error_msg.as_deref(), Some("No error"));
    assert_eq!(symbols.result.unwrap()[0]["symbol"], "THB_BTC");
}

#[tokio::test]
async fn test_zero_limit_kept_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": 0, "result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    client.market().trades("THB_BTC", Some(0)).await.unwrap();

    assert_eq!(
        received_query(&server, "/api/market/trades").await.as_deref(),
        Some("sym=THB_BTC&lmt=0")
    );
}

#[tokio::test]
async fn test_legacy_filter_drops_zero_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/depth"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"asks": [], "bids": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_query_filter(QueryFilter::LegacyFalsy);
    let client = BitkubRestClient::with_config(config).unwrap();
    client.get_depth("THB_BTC", Some(0)).await.unwrap();

    assert_eq!(
        received_query(&server, "/api/market/depth").await.as_deref(),
        Some("sym=THB_BTC")
    );
}

#[tokio::test]
async fn test_public_upstream_failure_is_tagged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/bids"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.market().bids("THB_BTC", Some(5)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    assert_eq!(err.component(), Some("MarketEndpoints"));
    assert_eq!(err.method(), Some("bids"));
    assert!(matches!(
        err.root(),
        RestError::Status { status: 503, body } if body == "maintenance"
    ));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/market/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.market().books("THB_BTC", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.method(), Some("books"));
}

// ============================================================================
// TEST: TRADINGVIEW
// ============================================================================

#[tokio::test]
async fn test_tradingview_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tradingview/history"))
        .and(query_param("symbol", "BTC_THB"))
        .and(query_param("resolution", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "s": "ok",
            "t": [1633424400, 1633428000],
            "o": [1700000, 1710000],
            "h": [1720000, 1715000],
            "l": [1690000, 1700000],
            "c": [1710000, 1705000],
            "v": [1.5, 2.25]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let history = client
        .get_history("BTC_THB", Resolution::OneHour, 1633424400, 1633428000)
        .await
        .unwrap();

    assert!(history.is_ok());
    let candles = history.candles();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].time, 1633424400);
    assert_eq!(
        received_query(&server, "/tradingview/history").await.as_deref(),
        Some("symbol=BTC_THB&resolution=60&from=1633424400&to=1633428000")
    );
}
