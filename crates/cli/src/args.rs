//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main()`).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "hostwatch")]
#[command(about = "Hostwatch CLI - Query and manage monitored hosts", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  hostwatch hosts search 'env:prod'\n  hostwatch hosts mute web-01.example.com --message 'planned maintenance'\n  hostwatch hosts unmute web-01.example.com\n  hostwatch hosts totals --output json\n"
)]
pub struct Cli {
    /// Base URL of the Hostwatch API (e.g., https://api.hostwatch.com)
    #[arg(short, long, global = true, env = "HOSTWATCH_BASE_URL")]
    pub base_url: Option<String>,

    /// API key for authentication
    #[arg(short, long, global = true, env = "HOSTWATCH_API_KEY")]
    pub api_key: Option<String>,

    /// Application key for authentication
    #[arg(long, global = true, env = "HOSTWATCH_APP_KEY")]
    pub app_key: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, global = true, env = "HOSTWATCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests
    #[arg(long, global = true, env = "HOSTWATCH_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "HOSTWATCH_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search, mute, and inspect monitored hosts
    Hosts {
        #[command(subcommand)]
        command: commands::hosts::HostsCommand,
    },
}
