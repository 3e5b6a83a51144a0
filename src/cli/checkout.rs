//! Checkout session operation.

use std::io::{self, Write};

use storefront::StorefrontConfig;
use storefront::commerce::{CommerceError, CommerceGateway};
use storefront::session::AccessToken;

use super::output::write_checkout;
use super::{build_gateway, resolve_access_token};

/// Opens a hosted checkout session for the shopper's cart.
///
/// # Errors
///
/// Returns [`CommerceError::Configuration`] when the shipping address is
/// incomplete, [`CommerceError::MissingToken`] without a session, or the
/// gateway error when either request fails.
pub async fn run(config: &StorefrontConfig) -> Result<(), CommerceError> {
    let token = resolve_access_token(config)?;
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &token, &mut stdout).await
}

/// Opens a checkout session using the given gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &StorefrontConfig,
    gateway: &G,
    token: &AccessToken,
    writer: &mut W,
) -> Result<(), CommerceError>
where
    G: CommerceGateway,
    W: Write,
{
    let address = config.shipping_address()?;
    let cart = gateway.cart(token).await?;
    tracing::debug!(cart_id = %cart.cart_id, "opening checkout session");
    let response = gateway
        .checkout_session(token, &cart.cart_id, &address, config.return_url())
        .await?;
    write_checkout(writer, &response)
}
