//! Error types for the client data access layer.

use thiserror::Error;

use crate::client::api::endpoint::Operation;

/// Classification of an [`ApiError`], used for reporting only.
///
/// Every kind is surfaced the same way; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be built from the local configuration
    Configuration,
    /// The API answered with a non-success status
    Api,
    /// Anything else: network failures, unreadable fixtures, malformed data
    Unexpected,
}

/// Failure to send a request or receive its response
#[derive(Error, Debug)]
#[error("Failed to send request: {0}")]
pub struct TransportError(pub String);

/// Error returned by every data access call
#[derive(Error, Debug)]
pub enum ApiError {
    /// Test mode request without a fixture file to read
    #[error("No fallback JSON defined for {endpoint}")]
    MissingFixture { endpoint: String },
    /// Endpoint template referenced a parameter that was not supplied
    #[error("Missing value for endpoint parameter {0:?}")]
    MissingParam(String),
    /// The API responded with a non-2xx status
    #[error("API error {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A fixture file could not be read
    #[error("Failed to read fixture {file}: {reason}")]
    Fixture { file: String, reason: String },
    /// Response or fixture body was not the expected JSON
    #[error("Failed to parse response data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to encode request data: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl ApiError {
    /// Determine the error kind based upon the error variant
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFixture { .. } | Self::MissingParam(_) => ErrorKind::Configuration,
            Self::Status { .. } => ErrorKind::Api,
            Self::Transport(_) | Self::Fixture { .. } | Self::Parse(_) | Self::Encode(_) => {
                ErrorKind::Unexpected
            }
        }
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Invalid endpoint table, detected when the client is built
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("No endpoint defined for operation {0:?}")]
    MissingEndpoint(Operation),
    #[error("Endpoint for operation {0:?} is defined more than once")]
    DuplicateEndpoint(Operation),
    #[error("Invalid endpoint for operation {operation:?}: {reason}")]
    InvalidEndpoint { operation: Operation, reason: String },
}
