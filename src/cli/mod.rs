//! CLI module for telex
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + environment)
//! - Command execution through the notify and followup handlers

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::{dispatch, execute_command};
pub use parser::{Cli, TargetKind};

use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load and merge configuration from the environment and CLI arguments
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger = ConfigurationMerger::from_env()?;
    Ok(merger.merge_cli_args(cli)?)
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if the logger configuration is invalid or a subscriber is
/// already installed
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}

/// Run the CLI: load configuration, set up logging, execute the command
/// reading the message body from stdin
///
/// # Returns
/// The line to print on standard output
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    execute_command(&cli, settings, tokio::io::stdin()).await
}
