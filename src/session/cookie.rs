//! Session cookie lookup in a `Cookie` request header.

/// Session cookie names in lookup order.
///
/// The plain name is used over HTTP, the `__Secure-` prefixed one over HTTPS.
pub const SESSION_COOKIE_NAMES: [&str; 2] = [
    "next-auth.session-token",
    "__Secure-next-auth.session-token",
];

/// Returns the session cookie value from a `Cookie` header.
///
/// Names are tried in [`SESSION_COOKIE_NAMES`] order; within one name the
/// first non-empty occurrence wins.
#[must_use]
pub fn session_cookie(header: &str) -> Option<&str> {
    SESSION_COOKIE_NAMES
        .iter()
        .find_map(|wanted| cookie_value(header, wanted))
}

/// Returns the value of the cookie called `name`.
#[must_use]
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| key.trim() == name && !value.trim().is_empty())
        .map(|(_, value)| value.trim().trim_matches('"'))
}
