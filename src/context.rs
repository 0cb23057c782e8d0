//! Request-scoped context carrying a Telex notifier.
//!
//! Code deep in a call chain can send notifications without every layer
//! knowing which `Notifier` is in use: the caller attaches one to a `Context`
//! and passes the context down explicitly.

use std::fmt;
use std::sync::Arc;

use crate::client::Notifier;

/// Context value threaded through call chains.
///
/// Cloning is cheap since the notifier is held behind an `Arc`.
///
/// # Example
/// ```ignore
/// let client = Arc::new(Client::new("https://telex.example.com")?);
/// let ctx = Context::new().with_notifier(client);
/// handle_request(&ctx).await?;
///
/// async fn handle_request(ctx: &Context) -> TelexResult<()> {
///     if let Some(notifier) = ctx.notifier() {
///         notifier.followup(&id, "deploy finished").await?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone, Default)]
pub struct Context {
    notifier: Option<Arc<dyn Notifier>>,
}

impl Context {
    /// Creates an empty context with no notifier attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context carrying `notifier`, replacing any previous one
    pub fn with_notifier(self, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    /// Retrieves the notifier stored in this context, if any
    pub fn notifier(&self) -> Option<Arc<dyn Notifier>> {
        self.notifier.clone()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}
