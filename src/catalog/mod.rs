//! Catalogue browsing state: filters, price inputs and paging.
//!
//! Everything here is synchronous and owned by a single view. Updates are
//! pure functions over plain values; listeners are invoked on the caller's
//! thread immediately after each change.

pub mod chips;
pub mod currency;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod price_range;

pub use chips::{ActiveChip, ActiveChips, ChipKind, FilterRemoval};
pub use currency::{Currency, DisplayContext, UnknownCurrency};
pub use error::CatalogError;
pub use filter::{
    CategoryMode, FilterConfig, FilterListener, FilterState, PricePreset, PriceRange,
    ProductFilters, matching_options, set_single, toggle_multi,
};
pub use pagination::{
    EllipsisSide, PageSlot, PageSummary, PageWindow, compute_visible_pages, page_count,
    slice_bounds,
};
pub use price_range::{Bound, PriceRangeInput, PriceRangeListener};
