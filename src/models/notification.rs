//! Notification models for the Telex producer API.
//!
//! This module provides the payload sent to Telex when creating a
//! notification, its validation rules, and the result Telex returns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{TelexError, TelexResult};

// ============================================================================
// Enums
// ============================================================================

/// Kind of recipient a notification is addressed to.
///
/// Telex accepts the literals `app`, `user`, `email` and `dashboard`. Any
/// other literal received or parsed is kept in `Other` so it can be reported
/// by [`Notification::validate`]; an empty `Other` means the type was never set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetType {
    App,
    User,
    Email,
    Dashboard,
    Other(String),
}

impl TargetType {
    /// All target types Telex knows about
    pub const KNOWN: [TargetType; 4] = [
        TargetType::App,
        TargetType::User,
        TargetType::Email,
        TargetType::Dashboard,
    ];

    /// Wire literal for this target type
    pub fn as_str(&self) -> &str {
        match self {
            TargetType::App => "app",
            TargetType::User => "user",
            TargetType::Email => "email",
            TargetType::Dashboard => "dashboard",
            TargetType::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TargetType::Other(_))
    }
}

impl Default for TargetType {
    fn default() -> Self {
        TargetType::Other(String::new())
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TargetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "app" => TargetType::App,
            "user" => TargetType::User,
            "email" => TargetType::Email,
            "dashboard" => TargetType::Dashboard,
            _ => TargetType::Other(s),
        }
    }
}

impl From<TargetType> for String {
    fn from(t: TargetType) -> Self {
        match t {
            TargetType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TargetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TargetType::from(s.to_string()))
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Recipient of a notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub id: String,
}

impl Target {
    pub fn new(target_type: TargetType, id: impl Into<String>) -> Self {
        Self {
            target_type,
            id: id.into(),
        }
    }

    pub fn app(id: impl Into<String>) -> Self {
        Self::new(TargetType::App, id)
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::new(TargetType::User, id)
    }

    pub fn email(id: impl Into<String>) -> Self {
        Self::new(TargetType::Email, id)
    }

    pub fn dashboard(id: impl Into<String>) -> Self {
        Self::new(TargetType::Dashboard, id)
    }
}

/// Link presented alongside a notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub label: String,
    pub url: String,
}

impl Action {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.url.is_empty()
    }
}

/// Notification message accepted by Telex.
///
/// The `action` object is always present on the wire; a missing action is
/// sent as empty strings and an all-empty action reads back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub target: Target,
    #[serde(
        serialize_with = "serialize_action",
        deserialize_with = "deserialize_action"
    )]
    pub action: Option<Action>,
}

fn serialize_action<S>(action: &Option<Action>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match action {
        Some(action) => action.serialize(serializer),
        None => Action::default().serialize(serializer),
    }
}

fn deserialize_action<'de, D>(deserializer: D) -> Result<Option<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    let action = Option::<Action>::deserialize(deserializer)?;
    Ok(action.filter(|a| !a.is_empty()))
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, target: Target) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            target,
            action: None,
        }
    }

    /// Attach an action; an all-empty action is stored as no action, which
    /// is how it reads back from the wire
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action).filter(|a| !a.is_empty());
        self
    }

    /// Validate that the notification contains everything Telex needs.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// id presence, id format, type presence, type validity.
    pub fn validate(&self) -> TelexResult<()> {
        if self.target.id.is_empty() {
            return Err(TelexError::MissingTargetId);
        }
        if Uuid::parse_str(&self.target.id).is_err() {
            return Err(TelexError::InvalidTargetId {
                id: self.target.id.clone(),
            });
        }
        match &self.target.target_type {
            TargetType::Other(s) if s.is_empty() => Err(TelexError::MissingTargetType),
            TargetType::Other(s) => Err(TelexError::UnknownTargetType {
                target_type: s.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Result from Telex containing the id of the created notification or followup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub id: String,
}

/// Body of a followup request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followup {
    #[serde(default)]
    pub body: String,
}
