//! Commerce REST API access.
//!
//! Wire records, the gateway seam with its `reqwest` implementation, and the
//! intake facade that gathers filter options across paginated listings.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod models;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::CommerceError;
#[cfg(test)]
pub use gateway::MockCommerceGateway;
pub use gateway::{
    CommerceGateway, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpCommerceGateway, TOKEN_HEADER,
};
pub use intake::CatalogIntake;
pub use models::{
    ApiResponse, Cart, CartLine, CartProduct, CartResponse, CategoryOrBrand, CheckoutResponse,
    CheckoutSession, FilterOptions, Metadata, ShippingAddress,
};
