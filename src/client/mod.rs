//! Telex client contract and its HTTP implementation.
//!
//! The `Notifier` trait is the seam callers depend on, so the HTTP `Client`
//! can be swapped for a test double without code changes.

mod http;
mod transport;

pub use http::Client;
pub use transport::build_transport;

use async_trait::async_trait;

use crate::error::TelexResult;
use crate::models::{Notification, NotificationResult};

/// Capability to create Telex notifications and append followups to them.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// Implementations must be Send + Sync so a single instance can be shared by
/// concurrent callers.
///
/// # Example
/// ```ignore
/// async fn alert(notifier: &dyn Notifier, app_id: &str) -> TelexResult<String> {
///     let n = Notification::new("Your DB is on fire!", "...", Target::app(app_id));
///     Ok(notifier.notify(&n).await?.id)
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Validates and sends a notification, returning the id Telex assigned
    async fn notify(&self, notification: &Notification) -> TelexResult<NotificationResult>;

    /// Appends `body` to the notification identified by `id`
    async fn followup(&self, id: &str, body: &str) -> TelexResult<NotificationResult>;
}
