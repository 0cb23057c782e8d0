use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use telex::{Notification, NotificationResult, Notifier, TelexError, TelexResult};
use uuid::Uuid;

use crate::reporter::ErrorReporter;

#[derive(Default)]
struct Expectations {
    notify: VecDeque<TelexResult<NotificationResult>>,
    followup: VecDeque<TelexResult<NotificationResult>>,
}

/// In-memory [`Notifier`] returning scripted outcomes.
///
/// Use the `..._and_expect_success` / `..._and_expect_failure` methods to
/// queue outcomes; each call to `notify` or `followup` consumes the oldest
/// outcome for that operation. A call with nothing queued is reported to the
/// injected [`ErrorReporter`] and fails with [`TelexError::NoMoreExpectations`].
///
/// ```ignore
/// let reporter = RecordingReporter::new();
/// let client = MockClient::new(Arc::new(reporter.clone()));
/// let id = client.notify_and_expect_success();
///
/// let result = code_under_test(&client).await?;
/// assert_eq!(result.id, id);
/// client.expect_done();
/// assert!(reporter.is_empty());
/// ```
pub struct MockClient {
    reporter: Arc<dyn ErrorReporter>,
    expectations: Mutex<Expectations>,
}

impl MockClient {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            reporter,
            expectations: Mutex::new(Expectations::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Expectations> {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn success() -> (String, TelexResult<NotificationResult>) {
        let id = Uuid::new_v4().to_string();
        (id.clone(), Ok(NotificationResult { id }))
    }

    /// Expect a call to `notify` that succeeds; returns the id it will yield
    pub fn notify_and_expect_success(&self) -> String {
        let (id, outcome) = Self::success();
        self.lock().notify.push_back(outcome);
        id
    }

    /// Expect a call to `notify` that fails with `err`
    pub fn notify_and_expect_failure(&self, err: TelexError) {
        self.lock().notify.push_back(Err(err));
    }

    /// Expect a call to `followup` that succeeds; returns the id it will yield
    pub fn followup_and_expect_success(&self) -> String {
        let (id, outcome) = Self::success();
        self.lock().followup.push_back(outcome);
        id
    }

    /// Expect a call to `followup` that fails with `err`
    pub fn followup_and_expect_failure(&self, err: TelexError) {
        self.lock().followup.push_back(Err(err));
    }

    /// Number of queued `(notify, followup)` outcomes not yet consumed
    pub fn pending(&self) -> (usize, usize) {
        let expectations = self.lock();
        (expectations.notify.len(), expectations.followup.len())
    }

    /// Reports an error for each operation with outcomes left unconsumed
    pub fn expect_done(&self) {
        let (notify, followup) = self.pending();
        if notify > 0 {
            self.reporter
                .report(format!("{notify} Notify expectations left"));
        }
        if followup > 0 {
            self.reporter
                .report(format!("{followup} Followup expectations left"));
        }
    }
}

#[async_trait]
impl Notifier for MockClient {
    async fn notify(&self, _notification: &Notification) -> TelexResult<NotificationResult> {
        // The guard is released before reporting so a panicking reporter
        // cannot poison the queues
        let next = self.lock().notify.pop_front();
        next.unwrap_or_else(|| {
            self.reporter.report("no more notify expectations".to_string());
            Err(TelexError::NoMoreExpectations)
        })
    }

    async fn followup(&self, _id: &str, _body: &str) -> TelexResult<NotificationResult> {
        let next = self.lock().followup.pop_front();
        next.unwrap_or_else(|| {
            self.reporter
                .report("no more followup expectations".to_string());
            Err(TelexError::NoMoreExpectations)
        })
    }
}
