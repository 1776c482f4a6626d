//! TradingView chart endpoint
//!
//! Public. The response is the raw OHLCV series, not the usual envelope.

use bitkub_types::ParameterMap;
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::http::HttpTransport;
use crate::query::{encode_query_with, QueryFilter};
use crate::types::{Resolution, TradingViewHistory};

const COMPONENT: &str = "TradingViewEndpoints";

/// Historical chart data
pub struct TradingViewEndpoints<'a> {
    transport: &'a HttpTransport,
    filter: QueryFilter,
}

impl<'a> TradingViewEndpoints<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
            filter: QueryFilter::default(),
        }
    }

    /// Set how empty query parameters are dropped
    pub fn with_query_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Get OHLCV bars for `symbol` between two timestamps (seconds)
    ///
    /// # Arguments
    /// * `symbol` - Chart symbol, e.g. `BTC_THB`
    /// * `resolution` - Bar size
    /// * `from` - Start timestamp
    /// * `to` - End timestamp
    #[instrument(skip(self))]
    pub async fn history(
        &self,
        symbol: &str,
        resolution: Resolution,
        from: i64,
        to: i64,
    ) -> RestResult<TradingViewHistory> {
        debug!("Fetching chart history");

        let params = history_params(symbol, resolution, from, to);
        let query = encode_query_with(&params, self.filter);

        self.transport
            .get("/tradingview/history", &query)
            .await
            .map_err(|e| e.at(COMPONENT, "history"))
    }
}

fn history_params(symbol: &str, resolution: Resolution, from: i64, to: i64) -> ParameterMap {
    ParameterMap::new()
        .with("symbol", symbol)
        .with("resolution", resolution.as_str())
        .with("from", from)
        .with("to", to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;

    #[test]
    fn test_history_query() {
        let params = history_params("BTC_THB", Resolution::OneDay, 1633424427, 1633427427);
        assert_eq!(
            encode_query(&params),
            "?symbol=BTC_THB&resolution=1D&from=1633424427&to=1633427427"
        );
    }
}
