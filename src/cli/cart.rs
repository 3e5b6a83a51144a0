//! Cart display operation.

use std::io::{self, Write};

use storefront::StorefrontConfig;
use storefront::catalog::DisplayContext;
use storefront::commerce::{CommerceError, CommerceGateway};
use storefront::session::AccessToken;

use super::output::write_cart;
use super::{build_gateway, resolve_access_token};

/// Shows the signed-in shopper's cart.
///
/// # Errors
///
/// Returns [`CommerceError::MissingToken`] when no session is available, or
/// the gateway error when the cart cannot be loaded.
pub async fn run(config: &StorefrontConfig) -> Result<(), CommerceError> {
    let token = resolve_access_token(config)?;
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &token, &mut stdout).await
}

/// Shows the cart using the given gateway.
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
    let context = DisplayContext::new(config.display_currency()?);
    let cart = gateway.cart(token).await?;
    write_cart(writer, &cart, context)
}
