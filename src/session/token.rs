//! Session token decoding.
//!
//! The session cookie holds a token whose claims carry the commerce
//! backend's access token. Cookies issued by NextAuth are encrypted and read
//! by [`NextAuthSessionDecoder`](super::NextAuthSessionDecoder); plain HS256
//! signed tokens are read by [`JwtSessionDecoder`]. [`access_token`] ties
//! cookie lookup and decoding together.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use super::cookie::session_cookie;
use super::error::SessionError;

/// Environment variable consulted when no secret is configured.
pub const SECRET_ENV_VAR: &str = "NEXTAUTH_SECRET";

/// Backend access token taken from the session.
///
/// The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingAccessToken`] when the value is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, SessionError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SessionError::MissingAccessToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Shared secret used to verify session tokens.
#[derive(Clone)]
pub struct SessionSecret(String);

impl SessionSecret {
    /// Wraps a secret.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingSecret`] when the value is blank.
    pub fn new(secret: impl Into<String>) -> Result<Self, SessionError> {
        let value = secret.into();
        if value.trim().is_empty() {
            return Err(SessionError::MissingSecret);
        }
        Ok(Self(value))
    }

    /// Resolves the secret from configuration, falling back to the
    /// `NEXTAUTH_SECRET` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingSecret`] when neither source yields a
    /// non-blank value.
    pub fn from_config_or_env(configured: Option<&str>) -> Result<Self, SessionError> {
        configured
            .filter(|value| !value.trim().is_empty())
            .map(ToOwned::to_owned)
            .or_else(|| std::env::var(SECRET_ENV_VAR).ok())
            .map_or(Err(SessionError::MissingSecret), Self::new)
    }

    /// Exposes the secret bytes for key construction.
    #[must_use]
    pub const fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionSecret([REDACTED; {} bytes])", self.0.len())
    }
}

/// Signed-in shopper as recorded in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub name: Option<String>,
    /// E-mail address.
    pub email: Option<String>,
    /// Account role (e.g. `user`).
    pub role: Option<String>,
}

/// Claims carried by the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Commerce backend access token.
    #[serde(default)]
    pub token: Option<String>,
    /// Signed-in shopper.
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Expiry (Unix timestamp).
    pub exp: i64,
    /// Issued-at (Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
}

impl SessionClaims {
    /// Expiry as a UTC timestamp, when representable.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Decodes a session cookie value into claims.
#[cfg_attr(test, mockall::automock)]
pub trait SessionDecoder {
    /// Verifies and decodes the cookie value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the value is not a valid, unexpired
    /// session token.
    fn decode(&self, cookie_value: &str) -> Result<SessionClaims, SessionError>;
}

/// HS256 session token decoder.
pub struct JwtSessionDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtSessionDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSessionDecoder")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl JwtSessionDecoder {
    /// Creates a decoder verifying tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &SessionSecret) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.expose()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl SessionDecoder for JwtSessionDecoder {
    fn decode(&self, cookie_value: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(cookie_value, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                ErrorKind::InvalidSignature => SessionError::InvalidToken {
                    message: "signature does not match".to_owned(),
                },
                _ => SessionError::InvalidToken {
                    message: error.to_string(),
                },
            })
    }
}

/// Extracts the backend access token from a `Cookie` header.
///
/// Returns `Ok(None)` when the header carries no session cookie, so callers
/// can treat the shopper as signed out.
///
/// # Errors
///
/// Returns [`SessionError`] when the session cookie exists but cannot be
/// decoded, has expired, or carries no access token.
pub fn access_token(
    cookie_header: &str,
    decoder: &dyn SessionDecoder,
) -> Result<Option<AccessToken>, SessionError> {
    let Some(cookie_value) = session_cookie(cookie_header) else {
        tracing::debug!("no session cookie present");
        return Ok(None);
    };

    let claims = decoder.decode(cookie_value)?;
    let token = claims
        .token
        .as_deref()
        .ok_or(SessionError::MissingAccessToken)
        .and_then(AccessToken::new)?;
    tracing::debug!(
        user = claims.user.as_ref().and_then(|user| user.email.as_deref()),
        expires_at = ?claims.expires_at(),
        "decoded session"
    );
    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use rstest::{fixture, rstest};

    use super::*;

    const SECRET: &str = "test-session-secret";

    #[fixture]
    fn decoder() -> JwtSessionDecoder {
        let secret = SessionSecret::new(SECRET).expect("secret should be accepted");
        JwtSessionDecoder::new(&secret)
    }

    fn claims(token: Option<&str>, expires_in: i64) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            token: token.map(ToOwned::to_owned),
            user: Some(SessionUser {
                name: Some("Mona".to_owned()),
                email: Some("mona@example.com".to_owned()),
                role: Some("user".to_owned()),
            }),
            exp: now + expires_in,
            iat: Some(now),
        }
    }

    fn sign(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("claims should encode")
    }

    #[rstest]
    fn decodes_signed_session(decoder: JwtSessionDecoder) {
        let expected = claims(Some("backend-token"), 3_600);
        let decoded = decoder
            .decode(&sign(&expected, SECRET))
            .expect("token should decode");
        assert_eq!(decoded, expected);
    }

    #[rstest]
    fn expiry_converts_to_utc() {
        let session = SessionClaims {
            token: None,
            user: None,
            exp: 1_700_000_000,
            iat: None,
        };
        assert_eq!(
            session.expires_at().map(|at| at.to_rfc3339()),
            Some("2023-11-14T22:13:20+00:00".to_owned())
        );
    }

    #[rstest]
    fn rejects_foreign_signature(decoder: JwtSessionDecoder) {
        let token = sign(&claims(Some("backend-token"), 3_600), "another-secret");
        assert!(matches!(
            decoder.decode(&token),
            Err(SessionError::InvalidToken { .. })
        ));
    }

    #[rstest]
    fn rejects_expired_session(decoder: JwtSessionDecoder) {
        let token = sign(&claims(Some("backend-token"), -3_600), SECRET);
        assert_eq!(decoder.decode(&token), Err(SessionError::Expired));
    }

    #[rstest]
    fn rejects_garbage(decoder: JwtSessionDecoder) {
        assert!(matches!(
            decoder.decode("not-a-token"),
            Err(SessionError::InvalidToken { .. })
        ));
    }

    #[rstest]
    fn access_token_reads_the_session_cookie(decoder: JwtSessionDecoder) {
        let header = format!(
            "theme=dark; next-auth.session-token={}",
            sign(&claims(Some("backend-token"), 3_600), SECRET)
        );
        let token = access_token(&header, &decoder)
            .expect("session should decode")
            .expect("token should be present");
        assert_eq!(token.value(), "backend-token");
        assert_eq!(format!("{token:?}"), "AccessToken([REDACTED])");
    }

    #[rstest]
    fn access_token_is_none_without_cookie() {
        let mut decoder = MockSessionDecoder::new();
        decoder.expect_decode().never();
        assert_eq!(access_token("theme=dark", &decoder), Ok(None));
    }

    #[rstest]
    fn access_token_requires_token_claim() {
        let mut decoder = MockSessionDecoder::new();
        decoder
            .expect_decode()
            .times(1)
            .returning(|_| Ok(claims(None, 3_600)));
        assert_eq!(
            access_token("next-auth.session-token=abc", &decoder),
            Err(SessionError::MissingAccessToken)
        );
    }

    #[rstest]
    fn configured_secret_wins_over_environment() {
        let _guard = env_lock::lock_env([(SECRET_ENV_VAR, Some("from-env"))]);
        let secret = SessionSecret::from_config_or_env(Some("from-config"))
            .expect("configured secret should be used");
        assert_eq!(secret.expose(), b"from-config");
    }

    #[rstest]
    #[case::absent(None)]
    #[case::blank(Some("  "))]
    fn environment_supplies_missing_secret(#[case] configured: Option<&str>) {
        let _guard = env_lock::lock_env([(SECRET_ENV_VAR, Some("from-env"))]);
        let secret = SessionSecret::from_config_or_env(configured)
            .expect("environment secret should be used");
        assert_eq!(secret.expose(), b"from-env");
    }

    #[rstest]
    fn missing_secret_everywhere_is_an_error() {
        let _guard = env_lock::lock_env([(SECRET_ENV_VAR, None::<&str>)]);
        assert!(matches!(
            SessionSecret::from_config_or_env(None),
            Err(SessionError::MissingSecret)
        ));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn blank_secret_is_rejected(#[case] secret: &str) {
        assert!(matches!(
            SessionSecret::new(secret),
            Err(SessionError::MissingSecret)
        ));
    }
}
