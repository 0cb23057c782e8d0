//! Notify command handler
//!
//! Builds a notification from CLI arguments and posts it.

use crate::client::Notifier;
use crate::error::TelexResult;
use crate::models::{Notification, Target, TargetType};

/// Handler for posting a new notification
pub struct NotifyCommandHandler<'a> {
    notifier: &'a dyn Notifier,
}

impl<'a> NotifyCommandHandler<'a> {
    /// Create a new notify command handler
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Post the notification and return the line to print on success
    ///
    /// # Errors
    /// - Validation errors for the target id and type
    /// - Transport, status and decoding errors from Telex
    pub async fn execute(
        &self,
        title: &str,
        target_type: TargetType,
        target_id: &str,
        body: String,
    ) -> TelexResult<String> {
        let notification = Notification::new(title, body, Target::new(target_type, target_id));
        let result = self.notifier.notify(&notification).await?;

        tracing::info!(id = %result.id, "Posted message");
        Ok(format!("Posted message. ID={:?}", result.id))
    }
}
