use std::time::Duration;

use crate::config::HttpSettings;
use crate::error::{TelexError, TelexResult};

/// Builds the HTTP transport used by [`Client`](super::Client).
///
/// The returned `reqwest::Client` pools connections internally and is cheap to
/// clone, so one transport can back every client in a process.
///
/// # Example
/// ```ignore
/// let transport = build_transport(&HttpSettings::default())?;
/// let client = Client::with_transport("https://telex.example.com", transport)?;
/// ```
pub fn build_transport(settings: &HttpSettings) -> TelexResult<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout))
        .connect_timeout(Duration::from_secs(settings.connect_timeout))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| TelexError::Other(anyhow::Error::new(e).context("Failed to build HTTP client")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_from_defaults() {
        assert!(build_transport(&HttpSettings::default()).is_ok());
    }

    #[test]
    fn test_transport_builds_with_custom_user_agent() {
        let settings = HttpSettings {
            user_agent: "acme-billing/2.1".to_string(),
            ..HttpSettings::default()
        };
        assert!(build_transport(&settings).is_ok());
    }
}
