//! Logger Module
//!
//! A logging setup based on `tracing-subscriber` with support for:
//! - Console output on stderr (stdout is reserved for command output)
//! - Multiple formats (Full, Compact, JSON)
//! - Color control, disabled automatically when stderr is not a terminal

pub mod config;
pub mod error;


// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the logger with the given configuration
///
/// # Errors
/// Fails when the configuration is invalid or a global subscriber is already
/// installed.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    let level = config.parse_level()?;
    let filter = EnvFilter::default().add_directive(LevelFilter::from_level(level).into());
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| LoggerError::config(format!("Failed to install subscriber: {e}")))?;
    Ok(())
}
