//! Gateways for the commerce REST API.
//!
//! [`CommerceGateway`] is the seam the intake facade and CLI depend on;
//! [`HttpCommerceGateway`] performs real requests with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::CommerceError;
use super::models::{
    ApiErrorBody, ApiResponse, CartResponse, CategoryOrBrand, CheckoutRequest, CheckoutResponse,
    ShippingAddress,
};
use crate::session::AccessToken;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://ecommerce.routemisr.com/api/v1";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Header carrying the shopper's access token.
pub const TOKEN_HEADER: &str = "token";

const MAX_MESSAGE_CHARS: usize = 160;

/// Gateway that can load catalogue options and cart data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommerceGateway: Send + Sync {
    /// Fetch every category.
    async fn categories(&self) -> Result<ApiResponse<CategoryOrBrand>, CommerceError>;

    /// Fetch one page of brands; `None` requests the first page.
    async fn brands(
        &self,
        page: Option<u32>,
    ) -> Result<ApiResponse<CategoryOrBrand>, CommerceError>;

    /// Fetch the signed-in shopper's cart.
    async fn cart(&self, token: &AccessToken) -> Result<CartResponse, CommerceError>;

    /// Open a hosted checkout session for the cart.
    async fn checkout_session(
        &self,
        token: &AccessToken,
        cart_id: &str,
        address: &ShippingAddress,
        return_url: &str,
    ) -> Result<CheckoutResponse, CommerceError>;
}

/// `reqwest`-backed [`CommerceGateway`].
#[derive(Debug, Clone)]
pub struct HttpCommerceGateway {
    client: Client,
    base_url: Url,
}

impl HttpCommerceGateway {
    /// Creates a gateway rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidUrl`] when the URL is not an absolute
    /// HTTP(S) URL, or [`CommerceError::Configuration`] when the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CommerceError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|error| CommerceError::InvalidUrl(format!("{base_url}: {error}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CommerceError::InvalidUrl(format!(
                "{base_url}: expected an http(s) URL"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| CommerceError::Configuration {
                message: format!("failed to configure commerce HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Returns the API root requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CommerceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CommerceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T>(&self, operation: &str, request: RequestBuilder) -> Result<T, CommerceError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|error| CommerceError::Network {
            message: format!("{operation} failed: {error}"),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| CommerceError::Network {
            message: format!("{operation} response could not be read: {error}"),
        })?;
        tracing::debug!(operation, status = status.as_u16(), "commerce API responded");

        if !status.is_success() {
            return Err(map_http_error(operation, status, &body));
        }

        serde_json::from_str(&body).map_err(|error| CommerceError::Decode {
            message: format!("{operation}: {error}"),
        })
    }
}

#[async_trait]
impl CommerceGateway for HttpCommerceGateway {
    async fn categories(&self) -> Result<ApiResponse<CategoryOrBrand>, CommerceError> {
        let url = self.endpoint(&["categories"])?;
        self.send("list categories", self.client.get(url)).await
    }

    async fn brands(
        &self,
        page: Option<u32>,
    ) -> Result<ApiResponse<CategoryOrBrand>, CommerceError> {
        let mut url = self.endpoint(&["brands"])?;
        if let Some(number) = page {
            url.query_pairs_mut()
                .append_pair("page", &number.to_string());
        }
        self.send("list brands", self.client.get(url)).await
    }

    async fn cart(&self, token: &AccessToken) -> Result<CartResponse, CommerceError> {
        let url = self.endpoint(&["cart"])?;
        let request = self.client.get(url).header(TOKEN_HEADER, token.value());
        self.send("load cart", request).await
    }

    async fn checkout_session(
        &self,
        token: &AccessToken,
        cart_id: &str,
        address: &ShippingAddress,
        return_url: &str,
    ) -> Result<CheckoutResponse, CommerceError> {
        let mut url = self.endpoint(&["orders", "checkout-session", cart_id])?;
        url.query_pairs_mut().append_pair("url", return_url);
        let request = self
            .client
            .post(url)
            .header(TOKEN_HEADER, token.value())
            .json(&CheckoutRequest {
                shipping_address: address,
            });
        self.send("create checkout session", request).await
    }
}

fn map_http_error(operation: &str, status: StatusCode, body: &str) -> CommerceError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| truncate_for_message(body));
    tracing::warn!(operation, status = status.as_u16(), %message, "commerce API request failed");
    CommerceError::Api {
        status: status.as_u16(),
        message: format!("{operation} failed: {message}"),
    }
}

fn truncate_for_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "unknown error".to_owned();
    }
    let mut message: String = trimmed.chars().take(MAX_MESSAGE_CHARS).collect();
    if trimmed.chars().nth(MAX_MESSAGE_CHARS).is_some() {
        message.push('…');
    }
    message
}
