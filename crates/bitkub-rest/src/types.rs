//! Types for Bitkub REST API requests and responses

use bitkub_types::{transform, BitkubErrorCode, ParameterMap};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use typed_builder::TypedBuilder;

use crate::error::{RestError, RestResult};

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard Bitkub response body
///
/// Most endpoints answer `{"error": <code>, "result": ...}`. Some (e.g. the
/// ticker) return a bare object, which lands in `extra`; non-object bodies
/// land in `result`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiResponse {
    /// Numeric error code (`0` on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<i64>,
    /// Message resolved from `error`
    #[serde(rename = "errorMsg", skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    /// Result data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Any other top-level fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// Normalize a raw response body
    ///
    /// Runs the envelope [`transform`] first, so a known `error` code always
    /// comes with its `error_msg`.
    pub fn from_value(body: Value) -> Self {
        match transform(body) {
            Value::Object(mut obj) => {
                let error = take_if(&mut obj, "error", |v| v.as_i64());
                let error_msg = take_if(&mut obj, "errorMsg", |v| v.as_str().map(str::to_string));
                let result = obj.remove("result");
                Self {
                    error,
                    error_msg,
                    result,
                    extra: obj,
                }
            }
            other => Self {
                result: Some(other),
                ..Self::default()
            },
        }
    }

    /// Check if the response carries no business error
    pub fn is_success(&self) -> bool {
        self.error.map_or(true, |code| code == 0)
    }

    /// The business error reported by the exchange, if any
    pub fn exchange_error(&self) -> Option<ExchangeError> {
        let code = self.error.filter(|code| *code != 0)?;
        Some(ExchangeError {
            code,
            known: BitkubErrorCode::from_code(code),
            message: self
                .error_msg
                .clone()
                .unwrap_or_else(|| format!("Unknown error code {}", code)),
        })
    }

    /// Decode `result` as `T`
    pub fn result_as<T: DeserializeOwned>(&self) -> RestResult<Option<T>> {
        self.result
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| RestError::Parse(e.to_string()))
    }
}

fn take_if<T>(obj: &mut Map<String, Value>, key: &str, f: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let value = obj.get(key).and_then(&f)?;
    obj.remove(key);
    Some(value)
}

/// A business error returned as data in a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeError {
    /// Raw code
    pub code: i64,
    /// Parsed code, if documented
    pub known: Option<BitkubErrorCode>,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (error {})", self.message, self.code)
    }
}

// ============================================================================
// Server Types
// ============================================================================

/// Status of one endpoint group, from `GET /api/status`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointStatus {
    /// Endpoint group name
    pub name: String,
    /// `ok` when healthy
    pub status: String,
    /// Optional explanation
    #[serde(default)]
    pub message: String,
}

impl EndpointStatus {
    /// Check if the endpoint group is healthy
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Convert a server timestamp to a UTC datetime
///
/// The exchange has served both seconds and milliseconds; values beyond the
/// year 2286 in seconds are read as milliseconds.
pub fn server_datetime(ts: i64) -> Option<DateTime<Utc>> {
    if ts.abs() >= 10_000_000_000 {
        Utc.timestamp_millis_opt(ts).single()
    } else {
        Utc.timestamp_opt(ts, 0).single()
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order at `rat`
    #[default]
    Limit,
    /// Market order (`rat` must be 0)
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
        }
    }
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order placement request (bid or ask)
///
/// `amt` and `rat` are sent without trailing zeros, as the exchange requires.
///
/// ```
/// use bitkub_rest::types::{OrderRequest, OrderType};
/// use rust_decimal::Decimal;
///
/// let order = OrderRequest::builder()
///     .sym("THB_BTC")
///     .amt(Decimal::new(1000, 0))
///     .typ(OrderType::Market)
///     .build();
/// assert_eq!(order.rat, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OrderRequest {
    /// Symbol, e.g. `THB_BTC`
    #[builder(setter(into))]
    pub sym: String,
    /// Amount to spend (bid) or sell (ask)
    pub amt: Decimal,
    /// Rate; zero for market orders
    #[builder(default)]
    pub rat: Decimal,
    /// Order type
    #[builder(default)]
    pub typ: OrderType,
    /// Caller reference
    #[builder(default, setter(strip_option, into))]
    pub client_id: Option<String>,
}

impl OrderRequest {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("sym", self.sym.as_str())
            .with("amt", self.amt)
            .with("rat", self.rat)
            .with("typ", self.typ.to_string())
            .with_opt("client_id", self.client_id.as_deref())
    }
}

/// Reference to an existing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    /// Symbol, order id and side
    ById {
        sym: String,
        id: String,
        sd: OrderSide,
    },
    /// Order hash alone
    ByHash(String),
}

impl OrderRef {
    pub fn by_id(sym: impl Into<String>, id: impl Into<String>, sd: OrderSide) -> Self {
        Self::ById {
            sym: sym.into(),
            id: id.into(),
            sd,
        }
    }

    pub fn by_hash(hash: impl Into<String>) -> Self {
        Self::ByHash(hash.into())
    }

    pub fn to_params(&self) -> ParameterMap {
        match self {
            Self::ById { sym, id, sd } => ParameterMap::new()
                .with("sym", sym.as_str())
                .with("id", id.as_str())
                .with("sd", sd.to_string()),
            Self::ByHash(hash) => ParameterMap::new().with("hash", hash.as_str()),
        }
    }
}

/// Filter for `my-order-history`
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OrderHistoryQuery {
    /// Symbol, e.g. `THB_BTC`
    #[builder(setter(into))]
    pub sym: String,
    /// Page
    #[builder(default, setter(strip_option))]
    pub p: Option<u32>,
    /// Limit
    #[builder(default, setter(strip_option))]
    pub lmt: Option<u32>,
    /// Start timestamp
    #[builder(default, setter(strip_option))]
    pub start: Option<i64>,
    /// End timestamp
    #[builder(default, setter(strip_option))]
    pub end: Option<i64>,
}

impl OrderHistoryQuery {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("sym", self.sym.as_str())
            .with_opt("p", self.p)
            .with_opt("lmt", self.lmt)
            .with_opt("start", self.start)
            .with_opt("end", self.end)
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Crypto withdrawal request
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct CryptoWithdrawal {
    /// Currency, e.g. `BTC`
    #[builder(setter(into))]
    pub cur: String,
    /// Amount
    pub amt: Decimal,
    /// Destination address
    #[builder(setter(into))]
    pub adr: String,
    /// Memo or destination tag
    #[builder(default, setter(strip_option, into))]
    pub mem: Option<String>,
}

impl CryptoWithdrawal {
    pub fn to_params(&self) -> ParameterMap {
        ParameterMap::new()
            .with("cur", self.cur.as_str())
            .with("amt", self.amt)
            .with("adr", self.adr.as_str())
            .with_opt("mem", self.mem.as_deref())
    }
}

/// Page and limit for history listings
pub(crate) fn page_params(p: Option<u32>, lmt: Option<u32>) -> ParameterMap {
    ParameterMap::new().with_opt("p", p).with_opt("lmt", lmt)
}

// ============================================================================
// TradingView Types
// ============================================================================

/// Chart resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    FourHours,
    OneDay,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1",
            Self::FiveMinutes => "5",
            Self::FifteenMinutes => "15",
            Self::OneHour => "60",
            Self::FourHours => "240",
            Self::OneDay => "1D",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OHLCV series from `GET /tradingview/history`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradingViewHistory {
    /// `ok` or `no_data`
    pub s: String,
    /// Bar timestamps
    #[serde(default)]
    pub t: Vec<i64>,
    /// Open
    #[serde(default)]
    pub o: Vec<Decimal>,
    /// High
    #[serde(default)]
    pub h: Vec<Decimal>,
    /// Low
    #[serde(default)]
    pub l: Vec<Decimal>,
    /// Close
    #[serde(default)]
    pub c: Vec<Decimal>,
    /// Volume
    #[serde(default)]
    pub v: Vec<Decimal>,
}

/// One OHLCV bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candle {
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl TradingViewHistory {
    /// Check if the exchange returned data
    pub fn is_ok(&self) -> bool {
        self.s == "ok"
    }

    /// Bars as rows; stops at the shortest column
    pub fn candles(&self) -> Vec<Candle> {
        self.t
            .iter()
            .zip(&self.o)
            .zip(&self.h)
            .zip(&self.l)
            .zip(&self.c)
            .zip(&self.v)
            .map(|(((((t, o), h), l), c), v)| Candle {
                time: *t,
                open: *o,
                high: *h,
                low: *l,
                close: *c,
                volume: *v,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_envelope_success() {
        let resp = ApiResponse::from_value(json!({"error": 0, "result": [{"id": 1}]}));
        assert!(resp.is_success());
        assert_eq!(resp.error_msg.as_deref(), Some("No error"));
        assert!(resp.exchange_error().is_none());
        assert_eq!(resp.result, Some(json!([{"id": 1}])));
    }

    #[test]
    fn test_envelope_business_error() {
        let resp = ApiResponse::from_value(json!({"error": 18}));
        assert!(!resp.is_success());

        let err = resp.exchange_error().unwrap();
        assert_eq!(err.code, 18);
        assert_eq!(err.known, Some(BitkubErrorCode::InsufficientBalance));
        assert_eq!(err.to_string(), "Insufficient balance (error 18)");
    }

    #[test]
    fn test_envelope_unknown_code() {
        let resp = ApiResponse::from_value(json!({"error": 777}));
        let err = resp.exchange_error().unwrap();
        assert_eq!(err.known, None);
        assert!(resp.error_msg.is_none());
    }

    #[test]
    fn test_envelope_bare_object() {
        let resp = ApiResponse::from_value(json!({"THB_BTC": {"last": 1000}}));
        assert!(resp.is_success());
        assert_eq!(resp.extra["THB_BTC"]["last"], 1000);
    }

    #[test]
    fn test_envelope_serializes_back() {
        let resp = ApiResponse::from_value(json!({"error": 0, "result": 1}));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"error": 0, "errorMsg": "No error", "result": 1})
        );
    }

    #[test]
    fn test_result_as() {
        let resp = ApiResponse::from_value(json!({"error": 0, "result": {"THB": 10}}));
        let balances: Option<std::collections::HashMap<String, Decimal>> =
            resp.result_as().unwrap();
        assert_eq!(balances.unwrap()["THB"], dec!(10));
    }

    #[test]
    fn test_order_params() {
        let order = OrderRequest::builder()
            .sym("THB_BTC")
            .amt(dec!(1000.00))
            .typ(OrderType::Market)
            .build();

        assert_eq!(
            order.to_params().to_canonical_json(),
            r#"{"sym":"THB_BTC","amt":1000,"rat":0,"typ":"market"}"#
        );
    }

    #[test]
    fn test_order_ref_params() {
        let by_id = OrderRef::by_id("THB_BTC", "123", OrderSide::Sell);
        assert_eq!(
            by_id.to_params().to_canonical_json(),
            r#"{"sym":"THB_BTC","id":"123","sd":"sell"}"#
        );

        let by_hash = OrderRef::by_hash("fwQ6dnQWQPs4cbatF5Am2xCDP1J");
        assert_eq!(
            by_hash.to_params().to_canonical_json(),
            r#"{"hash":"fwQ6dnQWQPs4cbatF5Am2xCDP1J"}"#
        );
    }

    #[test]
    fn test_history_query_params() {
        let query = OrderHistoryQuery::builder().sym("THB_ETH").lmt(5).build();
        assert_eq!(
            query.to_params().to_canonical_json(),
            r#"{"sym":"THB_ETH","lmt":5}"#
        );
    }

    #[test]
    fn test_candles() {
        let history: TradingViewHistory = serde_json::from_value(json!({
            "s": "ok",
            "t": [1633424400, 1633428000],
            "o": [1.5, 2],
            "h": [2, 3],
            "l": [1, 1.5],
            "c": [2, 2.5],
            "v": [10, 0]
        }))
        .unwrap();

        assert!(history.is_ok());
        let candles = history.candles();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].close, dec!(2.5));
    }

    #[test]
    fn test_server_datetime() {
        let secs = server_datetime(1700000000).unwrap();
        let millis = server_datetime(1700000000000).unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn test_endpoint_status() {
        let statuses: Vec<EndpointStatus> = serde_json::from_value(json!([
            {"name": "Non-secure endpoints", "status": "ok", "message": ""},
            {"name": "Secure endpoints", "status": "maintenance"}
        ]))
        .unwrap();

        assert!(statuses[0].is_ok());
        assert!(!statuses[1].is_ok());
    }
}
