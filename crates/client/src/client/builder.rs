//! Client builder for constructing [`HostwatchClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`HostwatchClient`] methods in submodules)
//! - Reading environment variables or `.env` files (handled by
//!   `hostwatch_config::ConfigLoader`)
//!
//! # Invariants
//! - `credentials` is required and must be provided before calling `build()`
//! - `base_url` falls back to the hosted service when not provided
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::Credentials;
use crate::client::HostwatchClient;
use crate::error::{ClientError, Result};
use hostwatch_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`HostwatchClient`].
///
/// This builder provides a fluent API for configuring the Hostwatch client
/// before instantiation. All configuration options have sensible defaults
/// except for `credentials`, which is required.
///
/// # Example
///
/// ```rust,ignore
/// use hostwatch_client::{Credentials, HostwatchClient};
/// use secrecy::SecretString;
/// use std::time::Duration;
///
/// let client = HostwatchClient::builder()
///     .credentials(Credentials::new(
///         SecretString::new("my-api-key".to_string().into()),
///         SecretString::new("my-app-key".to_string().into()),
///     ))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct HostwatchClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for HostwatchClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl HostwatchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Hostwatch API.
    ///
    /// Defaults to the hosted service. Trailing slashes will be
    /// automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key pair sent with every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    ///
    /// # Note
    /// This only affects HTTPS connections. For HTTP URLs, a warning is logged
    /// but no error occurs.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// This method centralizes the conversion from config crate types to
    /// client crate types so the CLI and library callers stay in sync.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hostwatch_client::HostwatchClient;
    /// use hostwatch_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = HostwatchClient::builder()
    ///     .from_config(&config)
    ///     .build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(
            config.auth.api_key.clone(),
            config.auth.application_key.clone(),
        ));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    ///
    /// # Examples
    ///
    /// - `"https://api.hostwatch.com/"` -> `"https://api.hostwatch.com"`
    /// - `"https://api.hostwatch.com"` -> `"https://api.hostwatch.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`HostwatchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] if `credentials` was not
    /// provided. Returns `ClientError::HttpError` if the HTTP client fails
    /// to build.
    pub fn build(self) -> Result<HostwatchClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self.credentials.ok_or_else(|| {
            ClientError::MissingCredentials("API key and application key are required".to_string())
        })?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let is_https = base_url.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(HostwatchClient {
            http,
            base_url,
            credentials,
            max_retries: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> Config {
        Config::with_keys(
            SecretString::new("config-api-key".to_string().into()),
            SecretString::new("config-app-key".to_string().into()),
        )
    }

    #[test]
    fn test_from_config_with_keys() {
        let client = HostwatchClient::builder().from_config(&test_config()).build();

        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = test_config();
        config.connection.base_url = "https://api.eu.hostwatch.com".to_string();
        config.connection.skip_verify = true;
        config.connection.timeout = std::time::Duration::from_secs(120);
        config.connection.max_retries = 5;

        let builder = HostwatchClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://api.eu.hostwatch.com".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, std::time::Duration::from_secs(120));
        assert_eq!(builder.max_retries, 5);
    }

    #[test]
    fn test_from_config_carries_credentials() {
        let builder = HostwatchClient::builder().from_config(&test_config());
        let credentials = builder.credentials.expect("credentials should be set");

        assert_eq!(credentials.api_key(), "config-api-key");
        assert_eq!(credentials.application_key(), "config-app-key");
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        let input = "https://api.hostwatch.com/".to_string();
        let expected = "https://api.hostwatch.com";
        assert_eq!(HostwatchClientBuilder::normalize_base_url(input), expected);
    }

    #[test]
    fn test_normalize_base_url_no_trailing_slash() {
        let input = "https://api.hostwatch.com".to_string();
        let expected = "https://api.hostwatch.com";
        assert_eq!(HostwatchClientBuilder::normalize_base_url(input), expected);
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        let input = "https://api.hostwatch.com//".to_string();
        let expected = "https://api.hostwatch.com";
        assert_eq!(HostwatchClientBuilder::normalize_base_url(input), expected);
    }
}
