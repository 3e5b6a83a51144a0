//! Storefront library crate providing catalogue filtering and commerce access.
//!
//! The library models the product filter panel, the bounded price inputs and
//! the pager, reads the shopper's session cookie, and talks to the commerce
//! REST API for categories, brands, the cart and checkout.

pub mod catalog;
pub mod commerce;
pub mod config;
pub mod session;

pub use catalog::{CatalogError, FilterState, PageWindow, PriceRangeInput, ProductFilters};
pub use commerce::{
    CatalogIntake, CommerceError, CommerceGateway, FilterOptions, HttpCommerceGateway,
};
pub use config::{OperationMode, StorefrontConfig};
pub use session::{
    AccessToken, JwtSessionDecoder, NextAuthSessionDecoder, SessionError, access_token,
};
