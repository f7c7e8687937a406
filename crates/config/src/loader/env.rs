//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Hostwatch configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over built-in defaults but are
/// themselves overridden by explicit builder methods (CLI flags).
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("HOSTWATCH_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(key) = env_var_or_none("HOSTWATCH_API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(key) = env_var_or_none("HOSTWATCH_APP_KEY") {
        loader.set_application_key(Some(SecretString::new(key.into())));
    }
    if let Some(skip) = env_var_or_none("HOSTWATCH_SKIP_VERIFY") {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "HOSTWATCH_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("HOSTWATCH_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HOSTWATCH_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("HOSTWATCH_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HOSTWATCH_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }

    Ok(())
}
