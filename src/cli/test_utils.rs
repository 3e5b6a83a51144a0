//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront::commerce::test_support::typed_option_page;
use storefront::commerce::{
    ApiResponse, CartResponse, CategoryOrBrand, CheckoutResponse, CommerceError,
    CommerceGateway, ShippingAddress,
};
use storefront::session::AccessToken;

type Canned<T> = Option<Result<T, CommerceError>>;

/// A gateway returning canned responses and recording what it was asked.
#[derive(Clone, Default)]
pub struct StubGateway {
    categories: Option<ApiResponse<CategoryOrBrand>>,
    brand_pages: Vec<ApiResponse<CategoryOrBrand>>,
    cart: Canned<CartResponse>,
    checkout: Canned<CheckoutResponse>,
    tokens: Arc<Mutex<Vec<String>>>,
    checkouts: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubGateway {
    /// Sets the categories response.
    #[must_use]
    pub fn with_categories(mut self, page: ApiResponse<CategoryOrBrand>) -> Self {
        self.categories = Some(page);
        self
    }

    /// Sets the brand pages, served by 1-based page number.
    #[must_use]
    pub fn with_brand_pages(mut self, pages: Vec<ApiResponse<CategoryOrBrand>>) -> Self {
        self.brand_pages = pages;
        self
    }

    /// Sets the cart response.
    #[must_use]
    pub fn with_cart(mut self, cart: Result<CartResponse, CommerceError>) -> Self {
        self.cart = Some(cart);
        self
    }

    /// Sets the checkout response.
    #[must_use]
    pub fn with_checkout(mut self, checkout: Result<CheckoutResponse, CommerceError>) -> Self {
        self.checkout = Some(checkout);
        self
    }

    /// Tokens passed to signed-in requests, in call order.
    #[must_use]
    pub fn seen_tokens(&self) -> Vec<String> {
        self.tokens
            .lock()
            .expect("tokens mutex should be available")
            .clone()
    }

    /// `(cart_id, return_url)` pairs passed to checkout, in call order.
    #[must_use]
    pub fn seen_checkouts(&self) -> Vec<(String, String)> {
        self.checkouts
            .lock()
            .expect("checkouts mutex should be available")
            .clone()
    }

    fn record_token(&self, token: &AccessToken) {
        self.tokens
            .lock()
            .expect("tokens mutex should be available")
            .push(token.value().to_owned());
    }
}

fn not_stubbed(operation: &str) -> CommerceError {
    CommerceError::Api {
        status: 404,
        message: format!("{operation} is not stubbed"),
    }
}

#[async_trait]
impl CommerceGateway for StubGateway {
    async fn categories(&self) -> Result<ApiResponse<CategoryOrBrand>, CommerceError> {
        Ok(self
            .categories
            .clone()
            .unwrap_or_else(|| typed_option_page(1, 1, &[])))
    }

    async fn brands(
        &self,
        page: Option<u32>,
    ) -> Result<ApiResponse<CategoryOrBrand>, CommerceError> {
        let index = usize::try_from(page.unwrap_or(1).saturating_sub(1))
            .expect("page index should fit in usize");
        self.brand_pages
            .get(index)
            .cloned()
            .ok_or_else(|| not_stubbed("brands"))
    }

    async fn cart(&self, token: &AccessToken) -> Result<CartResponse, CommerceError> {
        self.record_token(token);
        self.cart.clone().unwrap_or_else(|| Err(not_stubbed("cart")))
    }

    async fn checkout_session(
        &self,
        token: &AccessToken,
        cart_id: &str,
        _address: &ShippingAddress,
        return_url: &str,
    ) -> Result<CheckoutResponse, CommerceError> {
        self.record_token(token);
        self.checkouts
            .lock()
            .expect("checkouts mutex should be available")
            .push((cart_id.to_owned(), return_url.to_owned()));
        self.checkout
            .clone()
            .unwrap_or_else(|| Err(not_stubbed("checkout")))
    }
}
