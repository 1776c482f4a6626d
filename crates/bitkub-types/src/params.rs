//! Request parameters
//!
//! Every Bitkub endpoint takes a flat set of named scalar parameters, some of
//! which are optional. [`ParameterMap`] keeps them in insertion order and
//! models an omitted optional argument as an absent entry, so the same map can
//! feed both the query-string encoder and the signed JSON body.

use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

/// A single scalar parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain string, sent verbatim
    Str(String),
    /// Integer (ids, limits, timestamps)
    Int(i64),
    /// Amount or rate
    Decimal(Decimal),
}

impl ParamValue {
    /// Whether this value counts as "empty" for legacy query filtering
    ///
    /// Empty strings and zero numbers are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Int(i) => *i == 0,
            Self::Decimal(d) => d.is_zero(),
        }
    }

    /// JSON token used in request bodies
    ///
    /// Strings are quoted and escaped. Decimals are written from their exact
    /// normalized text, never through a float, so `0.123456789012345678`
    /// reaches the exchange digit for digit and `1000.00` becomes `1000`.
    pub fn to_json_token(&self) -> String {
        match self {
            Self::Str(s) => Value::String(s.clone()).to_string(),
            Self::Int(i) => i.to_string(),
            Self::Decimal(d) => d.normalize().to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Decimal(d) => write!(f, "{}", d.normalize()),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Decimal(_) => RawValue::from_string(self.to_json_token())
                .map_err(S::Error::custom)?
                .serialize(serializer),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        Self::Int(i.into())
    }
}

impl From<u16> for ParamValue {
    fn from(i: u16) -> Self {
        Self::Int(i.into())
    }
}

impl From<Decimal> for ParamValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

/// Ordered mapping of parameter names to optional values
///
/// Absent values (`None`) are kept so the map mirrors the endpoint's full
/// argument list, but they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl ParameterMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.set(key.into(), Some(value.into()));
    }

    /// Set `key` to an optional value; `None` records the key as absent
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.set(key.into(), value.map(Into::into));
    }

    fn set(&mut self, key: String, value: Option<ParamValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`insert_opt`](Self::insert_opt)
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        self.entries.remove(pos).1
    }

    /// Get the value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether `key` has a present value
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries in insertion order, including absent ones
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Entries with a present value, in insertion order
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// Number of entries, including absent ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON object of the present entries in insertion order
    ///
    /// This is the byte form the exchange hashes when it checks a signature,
    /// so signing and transmission must both go through it.
    pub fn to_canonical_json(&self) -> String {
        let mut out = String::from("{");
        for (i, (key, value)) in self.present().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&Value::String(key.to_string()).to_string());
            out.push(':');
            out.push_str(&value.to_json_token());
        }
        out.push('}');
        out
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.present() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_falsy_values() {
        assert!(ParamValue::from("").is_falsy());
        assert!(ParamValue::from(0i64).is_falsy());
        assert!(ParamValue::from(dec!(0.00)).is_falsy());
        assert!(!ParamValue::from("THB_BTC").is_falsy());
        assert!(!ParamValue::from(10).is_falsy());
    }

    #[test]
    fn test_decimal_display_drops_trailing_zeros() {
        assert_eq!(ParamValue::from(dec!(1000.00)).to_string(), "1000");
        assert_eq!(ParamValue::from(dec!(0.10000000)).to_string(), "0.1");
    }

    #[test]
    fn test_decimal_json_numbers() {
        assert_eq!(ParamValue::from(dec!(1000.00)).to_json_token(), "1000");
        assert_eq!(ParamValue::from(dec!(0.5)).to_json_token(), "0.5");
        assert_eq!(ParamValue::from(dec!(-2.50)).to_json_token(), "-2.5");
        assert_eq!(ParamValue::from("a\"b").to_json_token(), r#""a\"b""#);
    }

    #[test]
    fn test_decimal_json_keeps_every_digit() {
        let map = ParameterMap::new()
            .with("amt", dec!(0.123456789012345678))
            .with("rat", dec!(12345678.123456789))
            .with("cap", dec!(99999999999999999999));

        let expected =
            r#"{"amt":0.123456789012345678,"rat":12345678.123456789,"cap":99999999999999999999}"#;
        assert_eq!(map.to_canonical_json(), expected);
        assert_eq!(serde_json::to_string(&map).unwrap(), expected);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = ParameterMap::new().with("ts", 1).with("id", 42);
        map.insert("ts", 1700000000i64);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ts", "id"]);
        assert_eq!(map.get("ts"), Some(&ParamValue::Int(1700000000)));
    }

    #[test]
    fn test_absent_entries_are_kept_but_not_present() {
        let map = ParameterMap::new()
            .with("sym", "THB_BTC")
            .with_opt::<i64>("lmt", None);

        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("lmt"));
        assert_eq!(map.present().count(), 1);
    }

    #[test]
    fn test_canonical_json() {
        let map = ParameterMap::new()
            .with("sym", "THB_BTC")
            .with("amt", 100)
            .with_opt::<&str>("client_id", None)
            .with("rat", 0);

        assert_eq!(map.to_canonical_json(), r#"{"sym":"THB_BTC","amt":100,"rat":0}"#);
        assert_eq!(ParameterMap::new().to_canonical_json(), "{}");
    }

    #[test]
    fn test_canonical_json_matches_serde() {
        let map = ParameterMap::new()
            .with("sym", "THB_\"BTC\"")
            .with("amt", dec!(0.25))
            .with("id", -3);

        let via_serde = serde_json::to_string(&map).unwrap();
        assert_eq!(map.to_canonical_json(), via_serde);
    }

    #[test]
    fn test_remove() {
        let mut map: ParameterMap = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.remove("a"), Some(ParamValue::Int(1)));
        assert_eq!(map.remove("a"), None);
        assert_eq!(map.len(), 1);
    }
}
