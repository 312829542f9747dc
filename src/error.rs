// Client error taxonomy
use thiserror::Error;

use crate::storage::StorageError;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to connect to server";

/// Every failure a client operation can surface to the user.
///
/// Validation errors are raised before any request leaves the process, network
/// errors when the backend could not be reached at all, and API errors when the
/// backend answered with a non-success status.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArmsError {
    #[error("{0}")]
    Validation(String),

    /// Transport failure; the detail is kept for logs, the message is fixed
    #[error("Network error: Unable to connect to server")]
    Network(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Not logged in. Run 'arms auth login <username>' first")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Broad category of an [`ArmsError`], as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Api,
    Client,
}

impl ArmsError {
    pub fn validation(message: impl Into<String>) -> Self {
        ArmsError::Validation(message.into())
    }

    pub fn network(detail: impl Into<String>) -> Self {
        ArmsError::Network(detail.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ArmsError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ArmsError::Forbidden(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ArmsError::Decode(message.into())
    }

    /// HTTP status for errors that came back from the backend
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ArmsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ArmsError::Validation(_) | ArmsError::Unauthenticated | ArmsError::Forbidden(_) => {
                ErrorKind::Validation
            }
            ArmsError::Network(_) => ErrorKind::Network,
            ArmsError::Api { .. } => ErrorKind::Api,
            ArmsError::Decode(_) | ArmsError::Storage(_) => ErrorKind::Client,
        }
    }

    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            ArmsError::Validation(_) => "VALIDATION_ERROR",
            ArmsError::Network(_) => "NETWORK_ERROR",
            ArmsError::Api { status: 401, .. } => "UNAUTHORIZED",
            ArmsError::Api { status: 403, .. } => "FORBIDDEN",
            ArmsError::Api { status: 404, .. } => "NOT_FOUND",
            ArmsError::Api { .. } => "API_ERROR",
            ArmsError::Unauthenticated => "UNAUTHENTICATED",
            ArmsError::Forbidden(_) => "FORBIDDEN",
            ArmsError::Decode(_) => "DECODE_ERROR",
            ArmsError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<StorageError> for ArmsError {
    fn from(err: StorageError) -> Self {
        ArmsError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ArmsError {
    fn from(err: serde_json::Error) -> Self {
        ArmsError::Decode(err.to_string())
    }
}

pub type ArmsResult<T> = Result<T, ArmsError>;
