//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: hostwatch_config::Config) -> Result<()> {
    match cli.command {
        Commands::Hosts { command } => {
            commands::hosts::run(config, command, &cli.output).await?;
        }
    }

    Ok(())
}
