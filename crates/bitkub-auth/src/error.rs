//! Error types for authentication operations

/// Errors that can occur while handling credentials or signing payloads
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Payload could not be signed
    #[error("Signing error: {0}")]
    Signing(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("BITKUB_API_KEY".to_string());
        assert!(err.to_string().contains("BITKUB_API_KEY"));

        let err = AuthError::Signing("empty secret".to_string());
        assert_eq!(err.to_string(), "Signing error: empty secret");
    }
}
