//! Query string encoding for public GET endpoints

use bitkub_types::{ParamValue, ParameterMap};

/// Which parameters are dropped from a query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryFilter {
    /// Drop absent parameters only; `0` and `""` are sent
    #[default]
    AbsentOnly,
    /// Also drop `0` and `""`, as earlier Bitkub clients did
    ///
    /// A legitimate zero (e.g. `rat=0` for a market order) disappears under
    /// this mode.
    LegacyFalsy,
}

impl QueryFilter {
    fn keeps(&self, value: &ParamValue) -> bool {
        match self {
            Self::AbsentOnly => true,
            Self::LegacyFalsy => !value.is_falsy(),
        }
    }
}

/// Encode parameters as `?k1=v1&k2=v2`, dropping absent ones
///
/// Returns an empty string when nothing survives. Values are concatenated as
/// is, without percent-encoding; symbols and numbers are URL-safe already.
///
/// Zeros are sent: `{sym: "THB_BTC", lmt: 0}` encodes as
/// `?sym=THB_BTC&lmt=0`. The legacy `?sym=THB_BTC` form comes from
/// [`encode_query_with`] and [`QueryFilter::LegacyFalsy`].
pub fn encode_query(params: &ParameterMap) -> String {
    encode_query_with(params, QueryFilter::default())
}

/// Encode parameters with an explicit [`QueryFilter`]
pub fn encode_query_with(params: &ParameterMap, filter: QueryFilter) -> String {
    let pairs: Vec<String> = params
        .present()
        .filter(|(_, value)| filter.keeps(value))
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
