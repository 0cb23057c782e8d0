//! Command handlers for CLI operations
//!
//! This module contains handlers for the two things the CLI can do,
//! separating command execution logic from parsing and configuration.

pub mod followup;
pub mod notify;

pub use followup::FollowupCommandHandler;
pub use notify::NotifyCommandHandler;

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::client::Notifier;
    use crate::error::TelexResult;
    use crate::models::{Notification, NotificationResult};

    /// Notifier that records calls and answers with a fixed id
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notifications: Mutex<Vec<Notification>>,
        pub followups: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notification: &Notification) -> TelexResult<NotificationResult> {
            notification.validate()?;
            self.notifications.lock().unwrap().push(notification.clone());
            Ok(NotificationResult {
                id: "n-1".to_string(),
            })
        }

        async fn followup(&self, id: &str, body: &str) -> TelexResult<NotificationResult> {
            self.followups
                .lock()
                .unwrap()
                .push((id.to_string(), body.to_string()));
            Ok(NotificationResult {
                id: "f-1".to_string(),
            })
        }
    }
}
