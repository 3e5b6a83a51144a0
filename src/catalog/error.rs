//! Error types for the checked catalogue operations.

use thiserror::Error;

/// Errors returned by the checked filter and paging operations.
///
/// The unchecked counterparts repair invalid input silently; these variants
/// exist so callers can surface feedback instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested price bounds are inverted or exceed the ceiling.
    #[error("price range {min}..{max} is invalid (ceiling {ceiling})")]
    InvalidRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
        /// Configured price ceiling.
        ceiling: u32,
    },

    /// The requested page lies outside `1..=total_pages`.
    #[error("page {requested} is out of range (1..={total_pages})")]
    PageOutOfRange {
        /// Page the caller asked for.
        requested: u32,
        /// Number of pages available.
        total_pages: u32,
    },

    /// A page size of zero was requested.
    #[error("items per page must be at least 1")]
    InvalidPageSize,
}
