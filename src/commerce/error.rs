//! Error types exposed by the commerce gateway layer.

use thiserror::Error;

use crate::session::SessionError;

/// Errors surfaced while talking to the commerce backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommerceError {
    /// The configured base URL could not be parsed.
    #[error("commerce API URL is invalid: {0}")]
    InvalidUrl(String),

    /// A signed-in operation was attempted without an access token.
    #[error("an access token is required; sign in first")]
    MissingToken,

    /// The backend answered with a non-success status.
    #[error("commerce API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the commerce API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode commerce API response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The session cookie could not be turned into an access token.
    #[error(transparent)]
    Session(#[from] SessionError),
}
