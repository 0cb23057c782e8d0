//! Configuration settings structures for telex
//!
//! This module defines the configuration structures that can be loaded from
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("telex/{}", crate::pkg_version())
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Transport configuration for the Telex client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::validation(
                "http.timeout",
                "Timeout must be greater than 0 seconds",
            ));
        }
        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout must be greater than 0 seconds",
            ));
        }
        if self.connect_timeout > self.timeout {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout cannot exceed the request timeout",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Logger Settings (compatible with LoggerConfig)
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output when stderr is a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the environment representation into the runtime
    /// LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.format".to_string(), e.to_string()))?;

        LoggerConfig::new(self.level, format, self.colored)
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete telex settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Telex service URL, possibly carrying credentials (`TELEX_URL`)
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validate the complete settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.logger.clone().into_logger_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_http_settings_defaults() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, 30);
        assert_eq!(settings.connect_timeout, 10);
        assert!(settings.user_agent.starts_with("telex/"));
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "warn");
        assert_eq!(settings.format, "full");
        assert!(settings.colored);
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.url.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut settings = Settings::default();
        settings.http.timeout = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "http.timeout"
        ));

        let mut settings = Settings::default();
        settings.http.connect_timeout = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_logger_settings_rejected() {
        let mut settings = Settings::default();
        settings.logger.format = "xml".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "logger.format"
        ));

        let mut settings = Settings::default();
        settings.logger.level = "loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_deserialize_with_missing_sections() {
        let settings: Settings =
            serde_json::from_str(r#"{"url": "https://telex.example.com"}"#).unwrap();
        assert_eq!(settings.url.as_deref(), Some("https://telex.example.com"));
        assert_eq!(settings.http, HttpSettings::default());
        assert_eq!(settings.logger, LoggerSettings::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_connect_timeout_never_exceeds_timeout(timeout in 1u64..600, connect in 1u64..600) {
            let settings = HttpSettings { timeout, connect_timeout: connect, ..HttpSettings::default() };
            prop_assert_eq!(settings.validate().is_ok(), connect <= timeout);
        }
    }
}
