//! Request credentials for the Hostwatch API.
//!
//! Hostwatch authenticates every request with a static key pair sent as
//! headers; there are no sessions or token renewal.

use secrecy::{ExposeSecret, SecretString};

/// Header carrying the account-level API key.
pub const API_KEY_HEADER: &str = "HW-API-KEY";

/// Header carrying the integration-level application key.
pub const APPLICATION_KEY_HEADER: &str = "HW-APPLICATION-KEY";

/// The API key pair attached to every outgoing request.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: SecretString,
    application_key: SecretString,
}

impl Credentials {
    /// Create credentials from the two keys.
    pub fn new(api_key: SecretString, application_key: SecretString) -> Self {
        Self {
            api_key,
            application_key,
        }
    }

    /// The account-level API key, exposed for header construction.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// The integration-level application key, exposed for header construction.
    pub fn application_key(&self) -> &str {
        self.application_key.expose_secret()
    }
}
