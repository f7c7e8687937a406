//! CLI command implementations.

pub mod hosts;

use anyhow::Result;
use hostwatch_client::HostwatchClient;
use hostwatch_config::Config;

/// Build a shared API client from the loaded configuration.
pub fn build_client(config: &Config) -> Result<HostwatchClient> {
    Ok(HostwatchClient::builder().from_config(config).build()?)
}
