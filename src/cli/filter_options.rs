//! Filter panel options listing.

use std::io::{self, Write};

use storefront::StorefrontConfig;
use storefront::catalog::{DisplayContext, PageWindow, matching_options};
use storefront::commerce::{CatalogIntake, CommerceError, CommerceGateway};

use super::build_gateway;
use super::output::{FilterOptionsView, write_filter_options};

/// Lists categories and the configured page of brands.
///
/// # Errors
///
/// Returns [`CommerceError`] if the configuration is invalid or an API
/// request fails.
pub async fn run(config: &StorefrontConfig) -> Result<(), CommerceError> {
    let gateway = build_gateway(config)?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &mut stdout).await
}

/// Lists filter options using the given gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &StorefrontConfig,
    gateway: &G,
    writer: &mut W,
) -> Result<(), CommerceError>
where
    G: CommerceGateway,
    W: Write,
{
    let context = DisplayContext::new(config.display_currency()?);
    let options = CatalogIntake::new(gateway).load_filter_options().await?;

    let query = config.search.as_deref().unwrap_or_default();
    let brands: Vec<&str> = matching_options(options.brand_names(), query).collect();
    let total_brands = u32::try_from(brands.len()).unwrap_or(u32::MAX);
    let mut window = PageWindow::from_items(total_brands, config.page_size)
        .with_max_visible(config.max_visible_pages);
    if window.try_change_page(config.page).is_err() {
        tracing::warn!(
            page = config.page,
            total_pages = window.total_pages(),
            "requested brand page does not exist; showing page 1"
        );
    }

    let categories: Vec<&str> = options.category_names().collect();
    let view = FilterOptionsView {
        categories: &categories,
        brands: window.page_of(&brands),
        window: &window,
        summary: window.summary(brands.len()),
        filter_config: config.filter_config(),
        context,
    };
    write_filter_options(writer, &view)
}
