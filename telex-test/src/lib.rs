//! Test doubles for the Telex client.
//!
//! - [`TestServer`] answers scripted responses over real HTTP, for tests that
//!   exercise a [`telex::Client`] end to end.
//! - [`MockClient`] implements [`telex::Notifier`] directly, for tests that
//!   only need the contract.
//!
//! Both keep one FIFO queue of expectations per endpoint and can report the
//! expectations left unconsumed.

mod mock;
mod reporter;
mod server;

pub use mock::MockClient;
pub use reporter::{ErrorReporter, PanicReporter, RecordingReporter};
pub use server::{CannedResponse, TestServer, generate_http_response};
