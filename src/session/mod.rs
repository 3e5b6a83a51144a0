//! Session cookie handling.
//!
//! Locates the session cookie in a request's `Cookie` header and
//! decodes it to recover the commerce backend access token.

pub mod cookie;
pub mod error;
pub mod nextauth;
pub mod token;

pub use cookie::{SESSION_COOKIE_NAMES, cookie_value, session_cookie};
pub use error::SessionError;
pub use nextauth::{CLOCK_TOLERANCE_SECS, NextAuthSessionDecoder};
#[cfg(test)]
pub use token::MockSessionDecoder;
pub use token::{
    AccessToken, JwtSessionDecoder, SECRET_ENV_VAR, SessionClaims, SessionDecoder, SessionSecret,
    SessionUser, access_token,
};
