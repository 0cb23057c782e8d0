//! Configuration management module for telex
//!
//! Settings are layered from built-in defaults and `TELEX_*` environment
//! variables; there is no configuration file.
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `TELEX_*` environment variables (`TELEX_HTTP__TIMEOUT` -> `http.timeout`)
//! 3. Command-line flags, applied by the CLI configuration merger

pub mod error;
pub mod loader;
pub mod settings;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpSettings, LoggerSettings, Settings};
