//! Wire records exchanged with the commerce REST API.

use serde::{Deserialize, Serialize};

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse<T> {
    /// Number of records in `data`.
    pub results: u32,
    /// Paging details for the whole collection.
    pub metadata: Metadata,
    /// Records on this page.
    pub data: Vec<T>,
}

/// Paging details returned alongside every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Page these records belong to (1-based).
    pub current_page: u32,
    /// Total number of pages.
    pub number_of_pages: u32,
    /// Records per page.
    pub limit: u32,
    /// Next page number, when one exists.
    #[serde(default)]
    pub next_page: Option<u32>,
}

impl Metadata {
    /// Returns the page to request next, if the listing continues.
    #[must_use]
    pub fn following_page(&self) -> Option<u32> {
        self.next_page
            .filter(|_| self.current_page < self.number_of_pages)
    }
}

/// A category or brand option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrBrand {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Category and brand names offered by the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Every category.
    pub categories: Vec<CategoryOrBrand>,
    /// Every brand across all pages.
    pub brands: Vec<CategoryOrBrand>,
}

impl FilterOptions {
    /// Category names in backend order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|option| option.name.as_str())
    }

    /// Brand names in backend order.
    pub fn brand_names(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(|option| option.name.as_str())
    }
}

/// Response to a cart lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Backend status string (e.g. `success`).
    pub status: String,
    /// Number of distinct lines in the cart.
    pub num_of_cart_items: u32,
    /// Cart identifier used by checkout.
    pub cart_id: String,
    /// Cart contents.
    pub data: Cart,
}

/// Shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user identifier.
    pub cart_owner: String,
    /// Cart lines.
    pub products: Vec<CartLine>,
    /// Sum of all line prices.
    pub total_cart_price: u32,
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartLine {
    /// Line identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Quantity.
    pub count: u32,
    /// Unit price.
    pub price: u32,
    /// Product summary.
    pub product: CartProduct,
}

/// Product summary embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Product title.
    pub title: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_cover: Option<String>,
}

/// Delivery details sent with a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// Street address and notes.
    pub details: String,
    /// Contact phone number.
    pub phone: String,
    /// City.
    pub city: String,
}

/// Response to a checkout session request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutResponse {
    /// Backend status string.
    pub status: String,
    /// Hosted payment session.
    pub session: CheckoutSession,
}

/// Hosted payment session the shopper is redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    /// Payment page URL.
    pub url: String,
    /// Redirect after successful payment.
    #[serde(default)]
    pub success_url: Option<String>,
    /// Redirect after cancelling.
    #[serde(default)]
    pub cancel_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckoutRequest<'a> {
    pub(super) shipping_address: &'a ShippingAddress,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    pub(super) message: Option<String>,
}
