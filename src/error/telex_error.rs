use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while building, validating or delivering Telex messages.
///
/// Validation variants are raised locally before any I/O happens. None of the
/// variants ever carry the credentials embedded in a service URL: transport
/// errors are stripped of their request URL and replaced by the scrubbed
/// endpoint the client posted to.
#[derive(Error, Debug)]
pub enum TelexError {
    /// The notification has no target id
    #[error("Missing Target.ID in Notification")]
    MissingTargetId,

    /// The target id is present but is not a UUID
    #[error("Target.ID not a UUID: {id}")]
    InvalidTargetId { id: String },

    /// The notification has no target type
    #[error("Missing Target.Type in Notification")]
    MissingTargetType,

    /// The target type is not one Telex understands
    #[error("Specified Target.Type is unknown: {target_type}")]
    UnknownTargetType { target_type: String },

    /// The service URL could not be parsed
    #[error("Invalid Telex URL: {reason}")]
    InvalidUrl { reason: String },

    /// The request could not be sent or the connection failed
    #[error("Request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Telex answered with something other than 201 Created
    #[error("Expected 201: Got {}", .status.as_u16())]
    UnexpectedStatus { status: StatusCode },

    /// The response body was not the expected JSON document
    #[error("Failed to decode Telex response")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// A test double ran out of scripted outcomes
    #[error("no more expectations")]
    NoMoreExpectations,

    /// Any other failure, mostly used to script errors in tests
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TelexError {
    pub(crate) fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source: source.without_url(),
        }
    }

    /// Status code of an unexpected response, if that is what this error is
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Result with TelexError to simplify function signatures
pub type TelexResult<T> = Result<T, TelexError>;
