//! Telex client library
//!
//! Builds and validates notifications for the Telex service, posts them over
//! HTTP and appends followups to notifications that already exist.
//!
//! Callers depend on the [`Notifier`] trait so tests can swap the HTTP
//! [`Client`] for the doubles in the `telex-test` crate.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod models;

pub use client::{Client, Notifier};
pub use context::Context;
pub use error::{TelexError, TelexResult};
pub use models::{Action, Notification, NotificationResult, Target, TargetType};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
