//! Hosts command implementation.
//!
//! Responsibilities:
//! - Search hosts with a filter expression, walking all result pages
//! - Mute and unmute hosts by name
//! - Show fleet-wide host totals
//! - Format output via shared formatters
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Filter expressions and hostnames are passed through without modification
//! - Mute flags left unset are omitted from the request entirely

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use hostwatch_client::HostMute;

use crate::formatters::{self, OutputFormat};

#[derive(Subcommand)]
pub enum HostsCommand {
    /// Search hosts matching a filter expression
    Search {
        /// Filter expression (e.g., 'env:prod', 'role:web')
        #[arg(value_name = "FILTER")]
        filter: String,
    },
    /// Mute monitoring notifications for a host
    Mute {
        /// Hostname to mute
        #[arg(value_name = "HOSTNAME")]
        hostname: String,

        /// Message stored alongside the mute
        #[arg(short, long)]
        message: Option<String>,

        /// POSIX timestamp at which the mute expires
        #[arg(long)]
        end: Option<String>,

        /// Replace an existing mute instead of failing
        #[arg(long = "override")]
        override_existing: bool,
    },
    /// Unmute a host
    Unmute {
        /// Hostname to unmute
        #[arg(value_name = "HOSTNAME")]
        hostname: String,
    },
    /// Show fleet-wide up and active host counts
    Totals,
}

pub async fn run(
    config: hostwatch_config::Config,
    command: HostsCommand,
    output_format: &str,
) -> Result<()> {
    match command {
        HostsCommand::Search { filter } => run_search(config, &filter, output_format).await,
        HostsCommand::Mute {
            hostname,
            message,
            end,
            override_existing,
        } => run_mute(config, &hostname, message, end, override_existing, output_format).await,
        HostsCommand::Unmute { hostname } => run_unmute(config, &hostname, output_format).await,
        HostsCommand::Totals => run_totals(config, output_format).await,
    }
}

async fn run_search(
    config: hostwatch_config::Config,
    filter: &str,
    output_format: &str,
) -> Result<()> {
    info!("Searching hosts (filter: {})", filter);

    let client = crate::commands::build_client(&config)?;

    let hosts = client
        .search_hosts(filter)
        .await
        .with_context(|| format!("Failed to search hosts with filter '{}'", filter))?;

    let format = OutputFormat::from_str(output_format)?;
    let output = formatters::format_hosts(&hosts, format)?;
    print!("{}", output);

    Ok(())
}

async fn run_mute(
    config: hostwatch_config::Config,
    hostname: &str,
    message: Option<String>,
    end: Option<String>,
    override_existing: bool,
    output_format: &str,
) -> Result<()> {
    info!("Muting host: {}", hostname);

    let client = crate::commands::build_client(&config)?;

    // The override flag is only sent when explicitly requested, so the
    // server's default behavior applies otherwise.
    let mute = HostMute {
        message,
        end_time: end,
        override_existing: if override_existing { Some(true) } else { None },
    };

    let response = client
        .mute_host(hostname, &mute)
        .await
        .with_context(|| format!("Failed to mute host '{}'", hostname))?;

    let format = OutputFormat::from_str(output_format)?;
    let output = formatters::format_action(&response, format)?;
    print!("{}", output);

    Ok(())
}

async fn run_unmute(
    config: hostwatch_config::Config,
    hostname: &str,
    output_format: &str,
) -> Result<()> {
    info!("Unmuting host: {}", hostname);

    let client = crate::commands::build_client(&config)?;

    let response = client
        .unmute_host(hostname)
        .await
        .with_context(|| format!("Failed to unmute host '{}'", hostname))?;

    let format = OutputFormat::from_str(output_format)?;
    let output = formatters::format_action(&response, format)?;
    print!("{}", output);

    Ok(())
}

async fn run_totals(config: hostwatch_config::Config, output_format: &str) -> Result<()> {
    info!("Fetching host totals");

    let client = crate::commands::build_client(&config)?;

    let totals = client
        .get_host_totals()
        .await
        .context("Failed to fetch host totals")?;

    let format = OutputFormat::from_str(output_format)?;
    let output = formatters::format_totals(&totals, format)?;
    print!("{}", output);

    Ok(())
}
