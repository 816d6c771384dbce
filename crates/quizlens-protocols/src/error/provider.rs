//! Inference provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Classify a non-success HTTP response by status code.
    pub fn from_api_response(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            429 => Self::RateLimited(message),
            _ => Self::ApiError { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_api_error() {
        let err = ProviderError::ApiError {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_provider_error_auth_failed() {
        let err = ProviderError::AuthenticationFailed("Invalid API key".to_string());
        assert!(err.to_string().contains("Authentication failed"));
    }

    #[test]
    fn test_provider_error_rate_limited() {
        let err = ProviderError::RateLimited("quota exceeded".to_string());
        assert!(err.to_string().contains("Rate limited"));
    }

    #[test]
    fn test_provider_error_network() {
        let err = ProviderError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
    }

    #[test]
    fn test_provider_error_invalid_response() {
        let err = ProviderError::InvalidResponse("no text in reply".to_string());
        assert!(err.to_string().contains("Invalid response"));
    }

    #[test]
    fn test_from_api_response_auth() {
        assert!(matches!(
            ProviderError::from_api_response(401, "denied".to_string()),
            ProviderError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ProviderError::from_api_response(403, "denied".to_string()),
            ProviderError::AuthenticationFailed(_)
        ));
    }

    #[test]
    fn test_from_api_response_rate_limit() {
        assert!(matches!(
            ProviderError::from_api_response(429, "slow down".to_string()),
            ProviderError::RateLimited(_)
        ));
    }

    #[test]
    fn test_from_api_response_other() {
        assert!(matches!(
            ProviderError::from_api_response(503, "unavailable".to_string()),
            ProviderError::ApiError { status: 503, .. }
        ));
    }
}
