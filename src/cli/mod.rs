//! CLI operation mode handlers.
//!
//! - [`filter_options`]: Categories, the paged brand list and price presets
//! - [`cart`]: The signed-in shopper's cart
//! - [`checkout`]: Hosted checkout session for the cart
//!
//! Output formatting utilities are in [`output`].

use storefront::StorefrontConfig;
use storefront::commerce::{CommerceError, HttpCommerceGateway};
use storefront::session::{AccessToken, NextAuthSessionDecoder, access_token};

pub mod cart;
pub mod checkout;
pub mod filter_options;
pub mod output;

#[cfg(test)]
pub mod test_utils;

/// Builds the HTTP gateway described by the configuration.
pub fn build_gateway(config: &StorefrontConfig) -> Result<HttpCommerceGateway, CommerceError> {
    HttpCommerceGateway::new(config.api_base_url(), config.request_timeout())
}

/// Decodes the configured session cookie into a backend access token.
///
/// # Errors
///
/// Returns [`CommerceError::MissingToken`] when no session cookie is present
/// and [`CommerceError::Session`] when it cannot be verified.
pub fn resolve_access_token(config: &StorefrontConfig) -> Result<AccessToken, CommerceError> {
    let cookie_header = config.require_session_cookie()?;
    let secret = config.resolve_session_secret()?;
    let decoder = NextAuthSessionDecoder::new(&secret)?;
    access_token(cookie_header, &decoder)?.ok_or(CommerceError::MissingToken)
}
