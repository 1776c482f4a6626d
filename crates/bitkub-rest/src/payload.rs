//! Authenticated payload assembly
//!
//! Every authenticated call signs its body with a timestamp taken from the
//! exchange's own clock immediately beforehand. The exchange rejects
//! timestamps outside its tolerance window, so the local clock is never used
//! and server time is never cached.

use async_trait::async_trait;
use bitkub_auth::{Credentials, SignedPayload};
use bitkub_types::ParameterMap;
use tracing::{instrument, warn};

use crate::error::{RestError, RestResult};

/// Body key holding the server timestamp
pub const TS_KEY: &str = "ts";

/// Source of the exchange's current time
#[async_trait]
pub trait ServerClock: Send + Sync {
    /// Current server timestamp, as returned by the exchange
    async fn server_time(&self) -> RestResult<i64>;
}

/// Merge `ts` into `data`, overriding any caller-supplied value
pub fn merge_timestamp(mut data: ParameterMap, ts: i64) -> ParameterMap {
    data.insert(TS_KEY, ts);
    data
}

/// Fetch server time, merge it into `data` and sign the result
///
/// # Errors
///
/// - [`RestError::ServerTimeUnavailable`] if the clock fails; nothing is signed
/// - [`RestError::Auth`] if signing fails
#[instrument(skip_all, fields(params = data.len()))]
pub async fn prepare_authenticated_payload<C>(
    clock: &C,
    credentials: &Credentials,
    data: ParameterMap,
) -> RestResult<SignedPayload>
where
    C: ServerClock + ?Sized,
{
    let ts = clock.server_time().await.map_err(|e| {
        warn!("Server time unavailable, not signing: {}", e);
        RestError::ServerTimeUnavailable(Box::new(e))
    })?;

    let payload = merge_timestamp(data, ts);
    Ok(credentials.sign(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitkub_types::ParamValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock(i64);

    #[async_trait]
    impl ServerClock for FixedClock {
        async fn server_time(&self) -> RestResult<i64> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct FailingClock {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ServerClock for FailingClock {
        async fn server_time(&self) -> RestResult<i64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RestError::Timeout)
        }
    }

    fn creds() -> Credentials {
        Credentials::new("key", "secret123").unwrap()
    }

    #[test]
    fn test_merge_timestamp() {
        let merged = merge_timestamp(ParameterMap::new().with("id", 42), 1700000000);
        assert_eq!(
            merged,
            ParameterMap::new().with("id", 42).with("ts", 1700000000i64)
        );
    }

    #[test]
    fn test_merge_overrides_caller_ts() {
        let data = ParameterMap::new().with("ts", 1).with("id", 42);
        let merged = merge_timestamp(data, 1700000000);

        assert_eq!(merged.get("ts"), Some(&ParamValue::Int(1700000000)));
        assert_eq!(merged.len(), 2);
    }

    #[tokio::test]
    async fn test_prepare_uses_server_time() {
        let clock = FixedClock(1700000000);
        let signed = prepare_authenticated_payload(&clock, &creds(), ParameterMap::new().with("id", 42))
            .await
            .unwrap();

        assert_eq!(
            signed.payload(),
            &ParameterMap::new().with("id", 42).with("ts", 1700000000i64)
        );
        assert_eq!(signed.ts(), Some(1700000000));
        assert_eq!(
            signed.sig(),
            "d4e403a7b12961cfff28d834faad185ce0debc16de91d9f229816b1243915e0e"
        );
    }

    #[tokio::test]
    async fn test_clock_failure_aborts() {
        let clock = FailingClock::default();
        let result = prepare_authenticated_payload(&clock, &creds(), ParameterMap::new()).await;

        let err = result.unwrap_err();
        assert!(matches!(err, RestError::ServerTimeUnavailable(_)));
        assert!(err.is_upstream_unavailable());
        assert_eq!(clock.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dyn_clock() {
        let clock: Box<dyn ServerClock> = Box::new(FixedClock(5));
        let signed = prepare_authenticated_payload(clock.as_ref(), &creds(), ParameterMap::new())
            .await
            .unwrap();
        assert_eq!(signed.ts(), Some(5));
    }
}
