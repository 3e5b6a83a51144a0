//! Error types for session token retrieval.

use thiserror::Error;

/// Errors raised while decoding the session cookie.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No signing secret was configured.
    #[error("session secret is required (use --session-secret or NEXTAUTH_SECRET)")]
    MissingSecret,

    /// The cookie value is not a valid session token for the secret.
    #[error("session token is invalid: {message}")]
    InvalidToken {
        /// Decoder detail describing the failure.
        message: String,
    },

    /// The session token has expired.
    #[error("session token has expired")]
    Expired,

    /// The content key could not be derived from the secret.
    #[error("session key derivation failed: {message}")]
    KeyDerivation {
        /// Derivation failure detail.
        message: String,
    },

    /// The session decoded but carries no backend access token.
    #[error("session does not carry an access token")]
    MissingAccessToken,
}
