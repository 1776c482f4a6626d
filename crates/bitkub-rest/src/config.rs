//! Process configuration
//!
//! Base URL and credentials come from the environment once at startup and are
//! then passed explicitly into the client. A `.env` file in the working
//! directory is honored when [`BitkubConfig::from_env_file`] is used.

use bitkub_auth::{Credentials, API_KEY_ENV, API_SECRET_ENV};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

/// Environment variable holding the exchange base URL
pub const BASE_URL_ENV: &str = "BITKUB_URL";

/// Public Bitkub API host
pub const DEFAULT_BASE_URL: &str = "https://api.bitkub.com";

/// Values loaded from the environment
///
/// Missing key or secret become empty strings; nothing is validated until
/// [`credentials`](Self::credentials) or
/// [`require_credentials`](Self::require_credentials) is called.
pub struct BitkubConfig {
    /// Exchange base URL, without trailing slash
    pub base_url: String,
    /// API key
    pub api_key: String,
    api_secret: SecretString,
}

impl BitkubConfig {
    /// Build a configuration from explicit values
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        let api_secret: String = api_secret.into();
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret),
        }
    }

    /// Read `BITKUB_URL`, `BITKUB_API_KEY` and `BITKUB_API_SECRET`
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_default();
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let api_secret = std::env::var(API_SECRET_ENV).unwrap_or_default();

        debug!(
            base_url_set = !base_url.is_empty(),
            api_key_set = !api_key.is_empty(),
            "Loaded Bitkub configuration from environment"
        );

        Self::new(base_url, api_key, api_secret)
    }

    /// Load a `.env` file (if present), then read the environment
    pub fn from_env_file() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_env()
    }

    /// Whether both key and secret are set
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    /// Credentials for authenticated endpoints
    ///
    /// Returns `Ok(None)` when neither value is set (public-only use) and an
    /// error when only one of them is.
    pub fn credentials(&self) -> RestResult<Option<Credentials>> {
        match (self.api_key.is_empty(), self.api_secret.expose_secret().is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(Credentials::new(
                self.api_key.clone(),
                self.api_secret.expose_secret().to_string(),
            )?)),
            (key_missing, _) => {
                let missing = if key_missing { API_KEY_ENV } else { API_SECRET_ENV };
                warn!("Incomplete Bitkub credentials: {} is empty", missing);
                Err(RestError::Config(format!("{} is empty", missing)))
            }
        }
    }

    /// Credentials, failing if they are not configured
    pub fn require_credentials(&self) -> RestResult<Credentials> {
        self.credentials()?.ok_or(RestError::AuthRequired)
    }
}

impl Clone for BitkubConfig {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for BitkubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitkubConfig")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

pub(crate) fn normalize_base_url(url: String) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults() {
        let config = BitkubConfig::new("", "", "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        let config = BitkubConfig::new("https://example.com/", "", "");
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_no_credentials() {
        let config = BitkubConfig::new("", "", "");
        assert!(!config.has_credentials());
        assert!(config.credentials().unwrap().is_none());
        assert!(matches!(
            config.require_credentials(),
            Err(RestError::AuthRequired)
        ));
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let config = BitkubConfig::new("", "key", "");
        assert!(matches!(config.credentials(), Err(RestError::Config(_))));

        let config = BitkubConfig::new("", "", "secret");
        assert!(matches!(config.credentials(), Err(RestError::Config(_))));
    }

    #[test]
    fn test_full_credentials() {
        let config = BitkubConfig::new("", "key", "secret");
        let creds = config.require_credentials().unwrap();
        assert_eq!(creds.api_key(), "key");
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = BitkubConfig::new("", "key", "very-secret");
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}
