//! Error types for the upload flow.
//!
//! - [`RejectedFile`] - a candidate whose media type is not accepted
//! - [`TransportError`] - no HTTP response was received
//! - [`UploadError`] - everything that turns an upload into the `Error` state
//! - [`ConfigError`] - invalid client configuration
//!
//! [`UploadError::user_message`] is the only place where user-visible
//! failure text is produced.

use std::fmt;

use thiserror::Error;

use crate::config::{API_ERROR_PREFIX, GENERIC_FAILURE_MESSAGE, MALFORMED_RESPONSE_MESSAGE};

// =============================================================================
// Selection Errors
// =============================================================================

/// A file the selector refused because of its media type.
///
/// Rejection never changes the upload state; callers decide whether to
/// tell the user about it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported file type '{media_type}' for {name}")]
pub struct RejectedFile {
    /// File name of the refused candidate.
    pub name: String,
    /// Media type that was not in the allow-list.
    pub media_type: String,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Network-level failure: connection refused, DNS, aborted request...
///
/// Displays its description, or the generic failure message when there is
/// none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: Option<String>,
}

impl TransportError {
    /// Failure carrying a description. Blank descriptions count as none.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::without_message()
        } else {
            Self { message: Some(message) }
        }
    }

    /// Failure with nothing descriptive attached.
    pub fn without_message() -> Self {
        Self { message: None }
    }

    /// The description, if the failure had one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(GENERIC_FAILURE_MESSAGE))
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// Upload Errors
// =============================================================================

/// Reasons an upload ends in the `Error` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// No response was received.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// 2xx response whose body has no string `summary`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl UploadError {
    /// Message shown to the user in the error view.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Http { status_text, .. } => format!("{API_ERROR_PREFIX}{status_text}"),
            UploadError::Transport(err) => err.to_string(),
            UploadError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint is not an absolute http(s) URL.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of offering a candidate to the selector.
pub type SelectResult<T> = Result<T, RejectedFile>;

/// Result of one upload attempt.
pub type UploadResult<T> = Result<T, UploadError>;
