//! Authentication credentials for the Bitkub API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use bitkub_types::ParameterMap;
use secrecy::{ExposeSecret, SecretString};
use tracing::trace;

use crate::error::{AuthError, AuthResult};
use crate::signer::{sign_payload, SignedPayload};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BITKUB_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BITKUB_API_SECRET";

/// API credentials for authenticated requests
///
/// Immutable once built. The secret is zeroized when the credentials are
/// dropped.
pub struct Credentials {
    /// API key (sent in the `X-BTK-APIKEY` header)
    api_key: String,
    /// API secret (HMAC key, never transmitted)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITKUB_API_KEY` and `BITKUB_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a payload with this secret
    ///
    /// `payload` must already contain the server timestamp.
    pub fn sign(&self, payload: &ParameterMap) -> AuthResult<SignedPayload> {
        trace!(fields = payload.len(), "Signing payload");
        sign_payload(payload, self.api_secret.expose_secret())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new secret with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(i, _)| &self.api_key[..i]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key_123", "super_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(!debug.contains("test_api_key_123"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("test_api..."));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_sign_matches_free_function() {
        let creds = Credentials::new("key", "secret123").unwrap();
        let payload = ParameterMap::new().with("id", 42).with("ts", 1700000000i64);

        let via_creds = creds.sign(&payload).unwrap();
        let direct = sign_payload(&payload, "secret123").unwrap();
        assert_eq!(via_creds, direct);
    }

    #[test]
    fn test_clone_keeps_secret() {
        let creds = Credentials::new("key", "secret123").unwrap();
        let cloned = creds.clone();
        let payload = ParameterMap::new().with("ts", 1700000000i64);

        assert_eq!(cloned.api_key(), "key");
        assert_eq!(
            creds.sign(&payload).unwrap().sig(),
            cloned.sign(&payload).unwrap().sig()
        );
    }
}
