//! Error types for the Hostwatch client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Hostwatch client operations.
///
/// Every operation surfaces exactly one of these; there is no partial-success
/// path. A failed page fetch in a paginated call discards everything fetched
/// so far and returns the error alone.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body could not be decoded as the expected type.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Missing credentials at client construction time.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_context() {
        let err = ClientError::ApiError {
            status: 403,
            url: "https://api.hostwatch.com/v1/hosts/totals".to_string(),
            message: "Forbidden".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("403"));
        assert!(rendered.contains("/v1/hosts/totals"));
        assert!(rendered.contains("Forbidden"));
    }

    #[test]
    fn test_max_retries_display() {
        let err = ClientError::MaxRetriesExceeded(4);
        assert_eq!(err.to_string(), "Maximum retries exceeded (4 attempts)");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = ClientError::InvalidResponse("expected object".to_string());
        assert_eq!(err.to_string(), "Invalid response format: expected object");
    }
}
