//! Configuration merger for CLI arguments and environment settings
//!
//! This module handles merging CLI argument overrides with the settings loaded
//! from `TELEX_*` environment variables.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Configuration merger that applies CLI arguments over loaded settings
///
/// CLI arguments have the highest priority: a positional URL replaces
/// `TELEX_URL`, and --verbose/--quiet replace `TELEX_LOGGER__LEVEL`.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger from the environment
    ///
    /// # Errors
    /// Returns ConfigError if loading or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigLoader::new().load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(url) = &cli.url {
            config.url = Some(url.clone());
        }

        // Apply logging level overrides from global flags
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }
}
