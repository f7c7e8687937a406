//! Main Hostwatch REST API client and API methods.
//!
//! This module provides the primary [`HostwatchClient`] for interacting with
//! the Hostwatch REST API. Every request is authenticated with the account's
//! static key pair; there are no sessions to manage.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `hosts`: Host directory methods (search, mute, unmute, totals)
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential loading (handled by `hostwatch-config` and
//!   [`builder::HostwatchClientBuilder::from_config`])
//!
//! # Invariants
//! - `base_url` is normalized (no trailing slash) before the client exists
//! - Rate-limit retries happen inside the transport layer only; API methods
//!   treat any error they see as terminal

pub mod builder;

// API method submodules
mod hosts;

use crate::auth::Credentials;

/// Hostwatch REST API client.
///
/// This client provides methods for interacting with the Hostwatch REST API.
/// Every request carries the account's API key pair as headers.
///
/// # Creating a Client
///
/// Use [`HostwatchClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use hostwatch_client::{Credentials, HostwatchClient};
/// use secrecy::SecretString;
///
/// let client = HostwatchClient::builder()
///     .credentials(Credentials::new(
///         SecretString::new("my-api-key".to_string().into()),
///         SecretString::new("my-app-key".to_string().into()),
///     ))
///     .build()?;
/// ```
///
/// The base URL defaults to the hosted service and only needs to be set for
/// testing or dedicated-cell accounts.
#[derive(Debug)]
pub struct HostwatchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) max_retries: usize,
}

impl HostwatchClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`HostwatchClient`].
    pub fn builder() -> builder::HostwatchClientBuilder {
        builder::HostwatchClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
