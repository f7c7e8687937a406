//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and Table output formats for host resources.
//! - Render missing optional values consistently.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing, null, or empty values render as `N/A` in tables and `null` in JSON.
//! - Empty result sets render a human message in tables and `[]` in JSON.

use anyhow::Result;
use hostwatch_client::{Host, HostActionResponse, HostTotals};

/// Standard representation for missing or null values in table output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Format an optional displayable value, using `N/A` when absent.
pub fn format_missing_display<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Render an epoch-seconds timestamp as a UTC date string.
///
/// Zero means the server never reported a check-in time, so it renders
/// as `N/A` rather than the epoch.
fn format_timestamp(secs: i64) -> String {
    if secs == 0 {
        return DEFAULT_MISSING_VALUE.to_string();
    }
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Format a host list.
pub fn format_hosts(hosts: &[Host], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(hosts)?),
        OutputFormat::Table => {
            if hosts.is_empty() {
                return Ok("No hosts found.".to_string());
            }

            let mut output = String::new();
            output.push_str("Name\tStatus\tMuted\tApps\tLast Reported\n");

            for host in hosts {
                let status = if host.up { "up" } else { "down" };
                let muted = if host.is_muted { "yes" } else { "no" };
                let apps = if host.apps.is_empty() {
                    DEFAULT_MISSING_VALUE.to_string()
                } else {
                    host.apps.join(",")
                };
                output.push_str(&format!(
                    "{}\t{}\t{}\t{}\t{}\n",
                    host.name,
                    status,
                    muted,
                    apps,
                    format_timestamp(host.last_reported_time)
                ));
            }

            output.push_str(&format!("\n{} hosts\n", hosts.len()));
            Ok(output)
        }
    }
}

/// Format a mute or unmute acknowledgement.
pub fn format_action(action: &HostActionResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(action)?),
        OutputFormat::Table => Ok(format!(
            "Action: {}\nHostname: {}\nMessage: {}\n",
            action.action,
            action.hostname,
            format_missing_display(action.message.as_deref())
        )),
    }
}

/// Format fleet-wide host totals.
pub fn format_totals(totals: &HostTotals, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(totals)?),
        OutputFormat::Table => Ok(format!(
            "Total Up: {}\nTotal Active: {}\n",
            format_missing_display(totals.total_up),
            format_missing_display(totals.total_active)
        )),
    }
}
