//! Ironic client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Ironic API
#[derive(Debug, Error)]
pub enum IronicError {
    /// HTTP request/response error (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ironic API returned a non-success status
    #[error("Ironic API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (bad credentials, expired token)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request or client configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IronicError {
    /// Whether this error is a 404 from Ironic
    pub fn is_not_found(&self) -> bool {
        matches!(self, IronicError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IronicError::Api {
            status: 503,
            message: "conductor unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Ironic API error (503): conductor unavailable");

        let err = IronicError::NotFound("/v1/nodes/abc".to_string());
        assert_eq!(err.to_string(), "Not found: /v1/nodes/abc");
        assert!(err.is_not_found());
    }
}
