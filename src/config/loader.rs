//! Configuration loader for telex
//!
//! This module provides the `ConfigLoader` struct that layers environment
//! variables over the built-in defaults.

use config::{Config, Environment};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "TELEX";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader reading `TELEX_*` environment variables
///
/// Examples:
/// - `TELEX_URL` -> `url`
/// - `TELEX_HTTP__TIMEOUT` -> `http.timeout`
/// - `TELEX_LOGGER__LEVEL` -> `logger.level`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    prefix: String,
}

impl ConfigLoader {
    /// Create a loader for the `TELEX_` prefix
    pub fn new() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Create a loader for a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A variable cannot be deserialized into its setting (e.g. a non-numeric timeout)
    /// - The resulting settings fail validation
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        // Environment variables are case-insensitive and converted to lowercase
        // TELEX_HTTP__TIMEOUT -> http.timeout
        Config::builder()
            .add_source(
                Environment::with_prefix(&self.prefix)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
