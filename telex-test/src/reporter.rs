use std::sync::{Arc, Mutex, PoisonError};

/// Sink for failures detected by the test doubles.
///
/// Rust tests fail by panicking; implementations decide whether a report
/// panics immediately or is collected and asserted on later.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: String);
}

/// Reporter that fails the current test as soon as something is reported
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl ErrorReporter for PanicReporter {
    fn report(&self, message: String) {
        panic!("{message}");
    }
}

/// Reporter that keeps every message for later inspection
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors().is_empty()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: String) {
        tracing::debug!(message = %message, "Expectation failure reported");
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_collects_in_order() {
        let reporter = RecordingReporter::new();
        assert!(reporter.is_empty());

        reporter.report("first".to_string());
        reporter.clone().report("second".to_string());

        assert_eq!(reporter.errors(), vec!["first", "second"]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_reporter_panics() {
        PanicReporter.report("boom".to_string());
    }
}
