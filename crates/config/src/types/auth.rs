//! Authentication types for Hostwatch configuration.
//!
//! Responsibilities:
//! - Define the API key pair used to authenticate requests.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Attaching keys to outgoing requests (see client crate).
//! - Reading keys from the environment (see `loader` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets; secrecy guards Debug and log output only.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
///
/// Hostwatch authenticates every request with a static key pair: the API key
/// identifies the account, the application key identifies the integration.
/// There is no session or token-exchange flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Account-level API key.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
    /// Integration-level application key.
    #[serde(with = "secret_string")]
    pub application_key: SecretString,
}

impl AuthConfig {
    /// Create an auth configuration from the two keys.
    pub fn new(api_key: SecretString, application_key: SecretString) -> Self {
        Self {
            api_key,
            application_key,
        }
    }
}
