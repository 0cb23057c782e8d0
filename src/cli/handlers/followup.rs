//! Followup command handler

use crate::client::Notifier;
use crate::error::TelexResult;

/// Handler for appending a followup to an existing notification
pub struct FollowupCommandHandler<'a> {
    notifier: &'a dyn Notifier,
}

impl<'a> FollowupCommandHandler<'a> {
    pub fn new(notifier: &'a dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Post the followup and return the line to print on success
    pub async fn execute(&self, id: &str, body: String) -> TelexResult<String> {
        let result = self.notifier.followup(id, &body).await?;

        tracing::info!(notification = %id, id = %result.id, "Posted followup message");
        Ok(format!(
            "Posted followup message to {:?}. ID={:?}",
            id, result.id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::fake::RecordingNotifier;

    #[tokio::test]
    async fn test_execute_posts_followup() {
        let notifier = RecordingNotifier::default();
        let handler = FollowupCommandHandler::new(&notifier);

        let line = handler
            .execute("abc", "This is a followup".to_string())
            .await
            .unwrap();
        assert_eq!(line, r#"Posted followup message to "abc". ID="f-1""#);
        assert_eq!(
            notifier.followups.lock().unwrap().as_slice(),
            &[("abc".to_string(), "This is a followup".to_string())]
        );
    }
}
