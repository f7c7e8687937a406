//! Basic loader tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test basic builder configuration with the API key pair.
//! - Test validation errors for missing keys.
//! - Test the hosted-API base URL default.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;

#[test]
fn test_loader_with_key_pair() {
    let loader = ConfigLoader::new()
        .with_api_key("test-api-key".to_string())
        .with_application_key("test-app-key".to_string());

    let config = loader.build().unwrap();
    assert_eq!(config.auth.api_key.expose_secret(), "test-api-key");
    assert_eq!(config.auth.application_key.expose_secret(), "test-app-key");
}

#[test]
fn test_loader_defaults_to_hosted_base_url() {
    let loader = ConfigLoader::new()
        .with_api_key("test-api-key".to_string())
        .with_application_key("test-app-key".to_string());

    let config = loader.build().unwrap();
    assert_eq!(config.connection.base_url, "https://api.hostwatch.com");
}

#[test]
fn test_loader_missing_api_key() {
    let loader = ConfigLoader::new().with_application_key("test-app-key".to_string());
    let result = loader.build();
    assert!(matches!(result, Err(ConfigError::MissingApiKey)));
}

#[test]
fn test_loader_missing_application_key() {
    let loader = ConfigLoader::new().with_api_key("test-api-key".to_string());
    let result = loader.build();
    assert!(matches!(result, Err(ConfigError::MissingApplicationKey)));
}

#[test]
fn test_loader_with_explicit_base_url() {
    let loader = ConfigLoader::new()
        .with_base_url("https://hostwatch.internal.example.com".to_string())
        .with_api_key("test-api-key".to_string())
        .with_application_key("test-app-key".to_string());

    let config = loader.build().unwrap();
    assert_eq!(
        config.connection.base_url,
        "https://hostwatch.internal.example.com"
    );
}

#[test]
fn test_loader_blank_base_url_falls_back_to_default() {
    let loader = ConfigLoader::new()
        .with_base_url("   ".to_string())
        .with_api_key("test-api-key".to_string())
        .with_application_key("test-app-key".to_string());

    let config = loader.build().unwrap();
    assert_eq!(config.connection.base_url, "https://api.hostwatch.com");
}
