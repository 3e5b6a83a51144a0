//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use storefront::catalog::{
    DisplayContext, FilterConfig, PageSlot, PageSummary, PageWindow, PricePreset,
};
use storefront::commerce::{CartResponse, CheckoutResponse, CommerceError};

/// Everything printed by the filter options listing.
pub struct FilterOptionsView<'a> {
    /// Category names.
    pub categories: &'a [&'a str],
    /// Brand names on the current page.
    pub brands: &'a [&'a str],
    /// Pager state for the brand list.
    pub window: &'a PageWindow,
    /// Caption for the visible brand range.
    pub summary: PageSummary,
    /// Price slider settings.
    pub filter_config: FilterConfig,
    /// Currency used for prices.
    pub context: DisplayContext,
}

/// Writes the filter panel options to the given writer.
pub fn write_filter_options<W: Write>(
    writer: &mut W,
    view: &FilterOptionsView<'_>,
) -> Result<(), CommerceError> {
    writeln!(writer, "Categories: {}", view.categories.join(", ")).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    writeln!(writer, "Brands:").map_err(|e| io_error(&e))?;
    for brand in view.brands {
        writeln!(writer, "  {brand}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Pages: {}", pager_line(view.window)).map_err(|e| io_error(&e))?;
    writeln!(writer, "{}", view.summary).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let presets: Vec<String> = PricePreset::BUTTONS
        .into_iter()
        .map(PricePreset::label)
        .collect();
    writeln!(
        writer,
        "Price: {} to {} (presets: {})",
        view.context.format_price(0),
        view.context.format_price(view.filter_config.price_ceiling),
        presets.join(", ")
    )
    .map_err(|e| io_error(&e))
}

/// Renders pager slots with the current page in brackets.
#[must_use]
pub fn pager_line(window: &PageWindow) -> String {
    window
        .visible_pages()
        .iter()
        .map(|slot| match slot {
            PageSlot::Page(number) if *number == window.current_page() => format!("[{number}]"),
            PageSlot::Page(_) | PageSlot::Ellipsis(_) => slot.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the cart contents to the given writer.
pub fn write_cart<W: Write>(
    writer: &mut W,
    cart: &CartResponse,
    context: DisplayContext,
) -> Result<(), CommerceError> {
    writeln!(
        writer,
        "Cart {} ({} items):",
        cart.cart_id, cart.num_of_cart_items
    )
    .map_err(|e| io_error(&e))?;
    for line in &cart.data.products {
        writeln!(
            writer,
            "  {} x{} @ {}",
            line.product.title,
            line.count,
            context.format_price(line.price)
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Total: {}",
        context.format_price(cart.data.total_cart_price)
    )
    .map_err(|e| io_error(&e))
}

/// Writes the checkout redirect to the given writer.
pub fn write_checkout<W: Write>(
    writer: &mut W,
    response: &CheckoutResponse,
) -> Result<(), CommerceError> {
    writeln!(writer, "Checkout session ready: {}", response.session.url)
        .map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`CommerceError::Io`].
pub(crate) fn io_error(error: &io::Error) -> CommerceError {
    CommerceError::Io {
        message: error.to_string(),
    }
}
