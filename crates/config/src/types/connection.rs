//! Connection configuration types for the Hostwatch client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Hostwatch API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g., https://api.hostwatch.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for proxies with self-signed certificates)
    pub skip_verify: bool,
    /// Connection timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config for the hosted API with the given key pair.
    pub fn with_keys(api_key: SecretString, application_key: SecretString) -> Self {
        Self::with_base_url_and_keys(DEFAULT_BASE_URL.to_string(), api_key, application_key)
    }

    /// Create a new config with an explicit base URL and key pair.
    pub fn with_base_url_and_keys(
        base_url: String,
        api_key: SecretString,
        application_key: SecretString,
    ) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                max_retries: DEFAULT_MAX_RETRIES,
            },
            auth: AuthConfig::new(api_key, application_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> (SecretString, SecretString) {
        (
            SecretString::new("test-api-key".to_string().into()),
            SecretString::new("test-app-key".to_string().into()),
        )
    }

    #[test]
    fn test_config_with_keys_uses_hosted_default() {
        let (api_key, application_key) = test_keys();
        let config = Config::with_keys(api_key, application_key);
        assert_eq!(config.connection.base_url, "https://api.hostwatch.com");
        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.connection.max_retries, 3);
    }

    #[test]
    fn test_config_with_explicit_base_url() {
        let (api_key, application_key) = test_keys();
        let config = Config::with_base_url_and_keys(
            "https://hostwatch.internal.example.com".to_string(),
            api_key,
            application_key,
        );
        assert_eq!(
            config.connection.base_url,
            "https://hostwatch.internal.example.com"
        );
    }

    #[test]
    fn test_connection_config_serde_seconds() {
        let config = ConnectionConfig {
            base_url: "https://api.hostwatch.com".to_string(),
            skip_verify: true,
            timeout: Duration::from_secs(60),
            max_retries: 5,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ConnectionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.timeout, Duration::from_secs(60));
        assert_eq!(deserialized.max_retries, 5);
    }

    /// Test that Config Debug output does not expose secrets.
    #[test]
    fn test_config_debug_does_not_expose_secrets() {
        let config = Config::with_keys(
            SecretString::new("my-secret-api-key".to_string().into()),
            SecretString::new("my-secret-app-key".to_string().into()),
        );

        let debug_output = format!("{:?}", config);

        assert!(
            !debug_output.contains("my-secret-api-key"),
            "Debug output should not contain the API key"
        );
        assert!(
            !debug_output.contains("my-secret-app-key"),
            "Debug output should not contain the application key"
        );

        // But non-sensitive data should be visible
        assert!(debug_output.contains("https://api.hostwatch.com"));
    }
}
