//! Error types for REST API operations

use bitkub_auth::AuthError;

/// Coarse classification of a [`RestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network failure, timeout, non-2xx status, or no server time
    UpstreamUnavailable,
    /// Payload could not be signed
    Signing,
    /// Authenticated endpoint used without credentials
    MissingCredentials,
    /// Response body could not be decoded
    Decode,
    /// Request could not be built from the given arguments or configuration
    InvalidRequest,
}

/// Errors that can occur during REST API operations
///
/// Exchange business errors (a known `error` code in a successful response)
/// are not represented here; they come back as data on
/// [`ApiResponse`](crate::types::ApiResponse).
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Server time could not be fetched, so nothing was signed
    #[error("Server time unavailable: {0}")]
    ServerTimeUnavailable(#[source] Box<RestError>),

    /// Credential or signing failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Missing API credentials for an authenticated endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure inside a named endpoint method
    #[error("{component} [{method}]: {source}")]
    Endpoint {
        /// Endpoint group, e.g. `MarketEndpoints`
        component: &'static str,
        /// Method name, e.g. `place_bid`
        method: &'static str,
        /// Underlying failure
        #[source]
        source: Box<RestError>,
    },
}

impl RestError {
    /// Wrap this error with the endpoint group and method it came from
    ///
    /// Already-wrapped errors are left alone so the innermost (originating)
    /// method is reported.
    pub fn at(self, component: &'static str, method: &'static str) -> Self {
        match self {
            wrapped @ Self::Endpoint { .. } => wrapped,
            other => Self::Endpoint {
                component,
                method,
                source: Box::new(other),
            },
        }
    }

    /// The error without any endpoint wrapping
    pub fn root(&self) -> &RestError {
        match self {
            Self::Endpoint { source, .. } => source.root(),
            other => other,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::Http(_) | Self::Status { .. } | Self::Timeout | Self::ServerTimeUnavailable(_) => {
                ErrorKind::UpstreamUnavailable
            }
            Self::Auth(AuthError::Signing(_)) => ErrorKind::Signing,
            Self::Auth(_) | Self::AuthRequired => ErrorKind::MissingCredentials,
            Self::Parse(_) => ErrorKind::Decode,
            Self::InvalidParameter(_) | Self::Config(_) => ErrorKind::InvalidRequest,
            Self::Endpoint { .. } => ErrorKind::InvalidRequest,
        }
    }

    /// Endpoint group that raised this error, if wrapped
    pub fn component(&self) -> Option<&'static str> {
        match self {
            Self::Endpoint { component, .. } => Some(*component),
            _ => None,
        }
    }

    /// Endpoint method that raised this error, if wrapped
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Self::Endpoint { method, .. } => Some(*method),
            _ => None,
        }
    }

    /// Check if the exchange could not be reached or answered with a failure
    pub fn is_upstream_unavailable(&self) -> bool {
        self.kind() == ErrorKind::UpstreamUnavailable
    }

    /// Check if this error came from payload signing
    pub fn is_signing_error(&self) -> bool {
        self.kind() == ErrorKind::Signing
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_wrapping() {
        let err = RestError::Timeout.at("MarketEndpoints", "get_ticker");

        assert_eq!(err.component(), Some("MarketEndpoints"));
        assert_eq!(err.method(), Some("get_ticker"));
        assert!(err.is_upstream_unavailable());
        assert_eq!(
            err.to_string(),
            "MarketEndpoints [get_ticker]: Request timed out"
        );
    }

    #[test]
    fn test_wrapping_keeps_origin() {
        let err = RestError::Timeout
            .at("ServerEndpoints", "get_server_time")
            .at("MarketEndpoints", "wallet");

        assert_eq!(err.component(), Some("ServerEndpoints"));
        assert_eq!(err.method(), Some("get_server_time"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            RestError::Auth(AuthError::Signing("empty".into())).kind(),
            ErrorKind::Signing
        );
        assert_eq!(RestError::AuthRequired.kind(), ErrorKind::MissingCredentials);
        assert_eq!(RestError::Parse("bad".into()).kind(), ErrorKind::Decode);
        assert_eq!(
            RestError::Status { status: 502, body: String::new() }.kind(),
            ErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            RestError::ServerTimeUnavailable(Box::new(RestError::Parse("x".into()))).kind(),
            ErrorKind::UpstreamUnavailable
        );
    }
}
