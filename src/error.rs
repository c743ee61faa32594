//! Error types for article-sync
//!
//! Every failure an operation can encounter maps onto one variant:
//! - Local validation and missing-session failures, raised before a request
//!   is ever issued
//! - `Unauthorized` for an explicit token rejection, the only error that
//!   triggers a state transition beyond the failing operation itself
//! - `Server` and `Transport` for remote and connectivity failures
//! - `Storage`, `Config`, and `Cancelled` for the crate's own plumbing
//!
//! All variants are handled inside the originating controller operation;
//! the value returned to the caller is observability, not control flow.

use thiserror::Error;

/// Result type alias for article-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for article-sync
#[derive(Debug, Error)]
pub enum Error {
    /// Client-side field checks failed; no request was issued
    #[error("validation failed: {0}")]
    Validation(String),

    /// An authenticated operation was attempted with no stored token;
    /// no request was issued
    #[error("no session token available")]
    MissingSession,

    /// The server explicitly rejected the session token (401)
    #[error("session rejected by server")]
    Unauthorized {
        /// Server-provided message, when the response body carried one
        message: Option<String>,
    },

    /// The server answered with a non-2xx status other than 401
    #[error("server error (status {status})")]
    Server {
        /// HTTP status code of the response
        status: u16,
        /// Server-provided message, when the response body carried one
        message: Option<String>,
    },

    /// The request itself could not complete (connectivity, malformed response)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Durable session storage could not be read or written
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// The controller was shut down while the request was in flight;
    /// the completion was a no-op
    #[error("operation cancelled by controller shutdown")]
    Cancelled,
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// The text to surface on the status channel for this error
    ///
    /// Prefers server-provided text when the response carried any, falling
    /// back to `generic` for transport failures and message-less responses.
    /// Validation and missing-session errors carry their own fixed text.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            Error::Validation(message) => message.clone(),
            Error::MissingSession => crate::controller::NO_TOKEN_MESSAGE.to_string(),
            Error::Unauthorized { message } | Error::Server { message, .. } => {
                message.clone().unwrap_or_else(|| generic.to_string())
            }
            _ => generic.to_string(),
        }
    }

    /// Whether this error means the session token is no longer valid
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}
