//! Encrypted NextAuth session cookies.
//!
//! NextAuth stores the session as a compact JWE with `alg: dir` and
//! `enc: A256GCM`. The content key is derived from the shared secret with
//! HKDF-SHA256, an empty salt and a fixed info string. The protected header
//! segment is the additional authenticated data.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hkdf::Hkdf;
use serde::Deserialize;
use sha2::Sha256;

use super::error::SessionError;
use super::token::{SessionClaims, SessionDecoder, SessionSecret};

const KEY_INFO: &[u8] = b"NextAuth.js Generated Encryption Key";
const KEY_LEN: usize = 32;
const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;
const DIRECT_ALGORITHM: &str = "dir";
const CONTENT_ENCRYPTION: &str = "A256GCM";

/// Clock skew tolerated when checking the `exp` claim, in seconds.
pub const CLOCK_TOLERANCE_SECS: i64 = 15;

#[derive(Deserialize)]
struct ProtectedHeader {
    alg: String,
    enc: String,
}

/// Decoder for the encrypted session cookie NextAuth issues.
#[derive(Clone)]
pub struct NextAuthSessionDecoder {
    cipher: Aes256Gcm,
}

impl fmt::Debug for NextAuthSessionDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextAuthSessionDecoder")
            .field("enc", &CONTENT_ENCRYPTION)
            .finish_non_exhaustive()
    }
}

impl NextAuthSessionDecoder {
    /// Creates a decoder for cookies encrypted under `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::KeyDerivation`] when the content key cannot
    /// be derived from the secret.
    pub fn new(secret: &SessionSecret) -> Result<Self, SessionError> {
        let key = derive_key(secret)?;
        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|error| {
            SessionError::KeyDerivation {
                message: error.to_string(),
            }
        })?;
        Ok(Self { cipher })
    }
}

impl SessionDecoder for NextAuthSessionDecoder {
    fn decode(&self, cookie_value: &str) -> Result<SessionClaims, SessionError> {
        let mut segments = cookie_value.trim().split('.');
        let (Some(header), Some(encrypted_key), Some(iv), Some(ciphertext), Some(tag), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(invalid("expected five compact JWE segments"));
        };

        let protected: ProtectedHeader = serde_json::from_slice(&segment("header", header)?)
            .map_err(|error| invalid(format!("header: {error}")))?;
        if protected.alg != DIRECT_ALGORITHM || protected.enc != CONTENT_ENCRYPTION {
            return Err(invalid(format!(
                "unsupported encryption {}/{}",
                protected.alg, protected.enc
            )));
        }
        if !encrypted_key.is_empty() {
            return Err(invalid("direct encryption carries no encrypted key"));
        }

        let nonce = segment("iv", iv)?;
        if nonce.len() != IV_LEN {
            return Err(invalid(format!("iv must be {IV_LEN} bytes")));
        }
        let tag_bytes = segment("tag", tag)?;
        if tag_bytes.len() != TAG_LEN {
            return Err(invalid(format!("tag must be {TAG_LEN} bytes")));
        }
        let mut sealed = segment("ciphertext", ciphertext)?;
        sealed.extend_from_slice(&tag_bytes);

        let plaintext = self
            .cipher
            .decrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: &sealed,
                    aad: header.as_bytes(),
                },
            )
            .map_err(|_| invalid("decryption failed; check the session secret"))?;
        let claims: SessionClaims = serde_json::from_slice(&plaintext)
            .map_err(|error| invalid(format!("claims: {error}")))?;

        if claims.exp.saturating_add(CLOCK_TOLERANCE_SECS) <= Utc::now().timestamp() {
            return Err(SessionError::Expired);
        }
        Ok(claims)
    }
}

fn derive_key(secret: &SessionSecret) -> Result<[u8; KEY_LEN], SessionError> {
    let mut key = [0_u8; KEY_LEN];
    Hkdf::<Sha256>::new(None, secret.expose())
        .expand(KEY_INFO, &mut key)
        .map_err(|error| SessionError::KeyDerivation {
            message: error.to_string(),
        })?;
    Ok(key)
}

fn segment(name: &str, value: &str) -> Result<Vec<u8>, SessionError> {
    URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|error| invalid(format!("{name} segment: {error}")))
}

fn invalid(message: impl Into<String>) -> SessionError {
    SessionError::InvalidToken {
        message: message.into(),
    }
}
