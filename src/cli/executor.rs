//! Command executor for dispatching CLI commands
//!
//! This module provides the entry point for executing the parsed command
//! once configuration has been merged and logging initialised.

use anyhow::Context as _;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::handlers::{FollowupCommandHandler, NotifyCommandHandler};
use super::parser::Cli;
use crate::client::{Client, Notifier};
use crate::config::settings::Settings;

/// Execute the CLI command with the given settings
///
/// Reads the message body from `input`, builds a client for the configured
/// URL and dispatches to the matching handler.
///
/// # Returns
/// The line to print on standard output
///
/// # Errors
/// Returns an error when no URL is configured, the URL is invalid, the body
/// cannot be read, or Telex rejects the request
pub async fn execute_command<R>(cli: &Cli, settings: Settings, input: R) -> anyhow::Result<String>
where
    R: AsyncRead + Unpin,
{
    let url = settings
        .url
        .as_deref()
        .context("missing Telex URL: pass it as an argument or set TELEX_URL")?;
    let client = Client::from_settings(url, &settings.http).context("invalid telex URL")?;

    let body = read_body(input).await?;
    dispatch(cli, &client, body).await
}

/// Dispatch to the notify or followup handler
pub async fn dispatch(cli: &Cli, notifier: &dyn Notifier, body: String) -> anyhow::Result<String> {
    if let Some(id) = &cli.followup {
        return Ok(FollowupCommandHandler::new(notifier)
            .execute(id, body)
            .await?);
    }

    let (Some(target_id), Some(target_type)) = (&cli.target, cli.target_type) else {
        anyhow::bail!("--target and --type are required unless --followup is given");
    };

    Ok(NotifyCommandHandler::new(notifier)
        .execute(&cli.title, target_type.into(), target_id, body)
        .await?)
}

async fn read_body<R>(mut input: R) -> anyhow::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut body = String::new();
    input
        .read_to_string(&mut body)
        .await
        .context("failed to read message body from stdin")?;
    Ok(body)
}
