//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.

use hostwatch_client::ClientError;

/// Structured exit codes for hostwatch.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (retry, refresh credentials, fail fast, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid or missing API keys.
    ///
    /// Scripts should refresh credentials before retrying.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - unknown hostname or endpoint.
    NotFound = 4,

    /// Validation error - bad filter expression or malformed response.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - keys lack access to the resource.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests, retries exhausted.
    ///
    /// Scripts should back off and retry later.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    ///
    /// Retryable conditions include:
    /// - Connection errors (temporary network issues)
    /// - Rate limiting (should retry after delay)
    /// - Service unavailable (maintenance may resolve)
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

impl From<&ClientError> for ExitCode {
    /// Map ClientError variants to structured exit codes.
    ///
    /// Each variant is categorized based on how scripts should respond.
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingCredentials(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            // 429 responses only surface after the retry budget is spent.
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,
            ClientError::MaxRetriesExceeded(_) => ExitCode::RateLimited,

            ClientError::ApiError { status: 502, .. } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { status: 503, .. } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { status: 504, .. } => ExitCode::ServiceUnavailable,

            // HttpError - check if it's a connection/timeout error
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Default: general error
            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
///
/// This trait provides a convenient way to get the appropriate exit code
/// from any anyhow error, handling both ClientError and other error types.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        // Try to downcast to ClientError
        if let Some(client_err) = self.downcast_ref::<ClientError>() {
            return ExitCode::from(client_err);
        }

        // Try to find ClientError in the chain
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        // Default to general error
        ExitCode::GeneralError
    }
}
