//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.storefront.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STOREFRONT_*`, plus `NEXTAUTH_SECRET` as a
//!    fallback for the session secret
//! 4. **Command-line arguments** – `--page`/`-p`, `--cart`/`-C` and friends
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "https://ecommerce.routemisr.com/api/v1"
//! page_size = 20
//! currency = "EUR"
//! session_secret = "change-me"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::{Currency, FilterConfig, PageWindow};
use crate::commerce::{CommerceError, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, ShippingAddress};
use crate::session::{SessionError, SessionSecret};

const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_MAX_VISIBLE_PAGES: u32 = 5;
const DEFAULT_PRICE_CEILING: u32 = 1_000;
const DEFAULT_RETURN_URL: &str = "http://localhost:3000";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// List categories and the requested brand page.
    FilterOptions,
    /// Show the signed-in shopper's cart.
    Cart,
    /// Open a checkout session for the shopper's cart.
    Checkout,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `STOREFRONT_API_BASE_URL` or `--api-base-url`: Commerce API root
/// - `STOREFRONT_SESSION_COOKIE` or `--session-cookie`: `Cookie` header value
/// - `STOREFRONT_SESSION_SECRET`, `NEXTAUTH_SECRET`, or `--session-secret`
/// - `STOREFRONT_PAGE_SIZE` or `--page-size`: Items per page
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::load().expect("failed to load configuration");
/// let window = config.page_window(12);
/// assert!(window.current_page() >= 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STOREFRONT",
    discovery(
        dotfile_name = ".storefront.toml",
        config_file_name = "storefront.toml",
        app_name = "storefront"
    )
)]
pub struct StorefrontConfig {
    /// Commerce API root.
    ///
    /// Defaults to the public storefront backend.
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Raw `Cookie` header carrying the session cookie.
    #[ortho_config(cli_short = 'c')]
    pub session_cookie: Option<String>,

    /// Secret used to verify the session cookie.
    ///
    /// Falls back to `NEXTAUTH_SECRET` when unset.
    #[ortho_config(cli_short = 's')]
    pub session_secret: Option<String>,

    /// Brand page to show (1-based).
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Items per page.
    #[ortho_config(cli_short = 'n')]
    pub page_size: u32,

    /// Page slots shown before the pager collapses into ellipses.
    #[ortho_config(cli_short = 'w')]
    pub max_visible_pages: u32,

    /// Upper bound of the price slider.
    #[ortho_config(cli_short = 'x')]
    pub price_ceiling: u32,

    /// HTTP timeout for commerce API requests, in seconds.
    #[ortho_config(cli_short = 't')]
    pub request_timeout_seconds: u64,

    /// Display currency code (`USD`, `EUR`, `GBP`, `EGP`).
    #[ortho_config(cli_short = 'm')]
    pub currency: Option<String>,

    /// Case-insensitive filter applied to the brand list.
    #[ortho_config(cli_short = 'q')]
    pub search: Option<String>,

    /// Shows the cart instead of the filter options.
    ///
    /// Note: `STOREFRONT_CART` is not supported because `ortho_config` does
    /// not load boolean values from the environment.
    #[ortho_config(cli_short = 'C')]
    pub cart: bool,

    /// Opens a checkout session for the cart.
    #[ortho_config(cli_short = 'K')]
    pub checkout: bool,

    /// URL the payment page returns to.
    #[ortho_config(cli_short = 'r')]
    pub return_url: Option<String>,

    /// Street address sent with checkout.
    #[ortho_config(cli_short = 'd')]
    pub shipping_details: Option<String>,

    /// Contact phone sent with checkout.
    #[ortho_config(cli_short = 'P')]
    pub shipping_phone: Option<String>,

    /// City sent with checkout.
    #[ortho_config(cli_short = 'y')]
    pub shipping_city: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            session_cookie: None,
            session_secret: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            price_ceiling: DEFAULT_PRICE_CEILING,
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
            currency: None,
            search: None,
            cart: false,
            checkout: false,
            return_url: None,
            shipping_details: None,
            shipping_phone: None,
            shipping_city: None,
        }
    }
}

impl StorefrontConfig {
    /// Determines the operation mode; checkout implies the cart.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.checkout {
            OperationMode::Checkout
        } else if self.cart {
            OperationMode::Cart
        } else {
            OperationMode::FilterOptions
        }
    }

    /// Returns the commerce API root.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Returns the checkout return URL.
    #[must_use]
    pub fn return_url(&self) -> &str {
        self.return_url.as_deref().unwrap_or(DEFAULT_RETURN_URL)
    }

    /// Returns the HTTP timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the display currency, defaulting to US dollars.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] for unknown currency codes.
    pub fn display_currency(&self) -> Result<Currency, CommerceError> {
        self.currency
            .as_deref()
            .map_or(Ok(Currency::Usd), str::parse)
            .map_err(|error| CommerceError::Configuration {
                message: error.to_string(),
            })
    }

    /// Returns the filter panel configuration.
    #[must_use]
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::default().with_price_ceiling(self.price_ceiling)
    }

    /// Builds the pager for a listing with `total_pages` pages, positioned
    /// on the configured page when it exists.
    #[must_use]
    pub fn page_window(&self, total_pages: u32) -> PageWindow {
        let mut window = PageWindow::from_pages(total_pages, self.page_size)
            .with_max_visible(self.max_visible_pages);
        window.change_page(self.page);
        window
    }

    /// Resolves the session secret from configuration or `NEXTAUTH_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingSecret`] when neither source provides a
    /// value.
    pub fn resolve_session_secret(&self) -> Result<SessionSecret, SessionError> {
        SessionSecret::from_config_or_env(self.session_secret.as_deref())
    }

    /// Returns the `Cookie` header value or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::MissingToken`] when no cookie is configured.
    pub fn require_session_cookie(&self) -> Result<&str, CommerceError> {
        self.session_cookie
            .as_deref()
            .filter(|header| !header.trim().is_empty())
            .ok_or(CommerceError::MissingToken)
    }

    /// Assembles the shipping address for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] naming the first missing
    /// field.
    pub fn shipping_address(&self) -> Result<ShippingAddress, CommerceError> {
        let field = |value: Option<&String>, flag: &str| {
            value
                .map(|text| text.trim())
                .filter(|text| !text.is_empty())
                .map(ToOwned::to_owned)
                .ok_or_else(|| CommerceError::Configuration {
                    message: format!("shipping address is incomplete (use --{flag})"),
                })
        };
        Ok(ShippingAddress {
            details: field(self.shipping_details.as_ref(), "shipping-details")?,
            phone: field(self.shipping_phone.as_ref(), "shipping-phone")?,
            city: field(self.shipping_city.as_ref(), "shipping-city")?,
        })
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Configuration`] when the page, page size or
    /// pager width is zero, or when the currency code is unknown.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.page == 0 {
            return Err(CommerceError::Configuration {
                message: "page numbers start at 1 (use --page)".to_owned(),
            });
        }
        if self.page_size == 0 {
            return Err(CommerceError::Configuration {
                message: "page size must be positive (use --page-size)".to_owned(),
            });
        }
        if self.max_visible_pages == 0 {
            return Err(CommerceError::Configuration {
                message: "the pager must show at least one page (use --max-visible-pages)"
                    .to_owned(),
            });
        }
        self.display_currency().map(|_| ())
    }
}

#[cfg(test)]
mod tests;
