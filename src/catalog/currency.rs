//! Display currency passed explicitly to price renderers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies the storefront can display prices in.
///
/// Catalogue prices are stored in US dollars; each currency carries a fixed
/// conversion rate expressed in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Egyptian pound.
    Egp,
}

impl Currency {
    /// All supported currencies in selector order.
    pub const ALL: [Self; 4] = [Self::Usd, Self::Eur, Self::Gbp, Self::Egp];

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Egp => "EGP",
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Egp => "ج.م",
        }
    }

    /// Conversion rate from US dollars, in thousandths.
    #[must_use]
    pub const fn rate_permille(self) -> u64 {
        match self {
            Self::Usd => 1_000,
            Self::Eur => 920,
            Self::Gbp => 780,
            Self::Egp => 48_000,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| UnknownCurrency(code.to_owned()))
    }
}

/// Rendering context handed to views at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayContext {
    currency: Currency,
}

impl DisplayContext {
    /// Creates a context rendering prices in `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Returns the display currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Formats a dollar price in the display currency with two decimals.
    #[must_use]
    pub fn format_price(&self, base_price: u32) -> String {
        let cents = (u64::from(base_price) * self.currency.rate_permille())
            .checked_div(10)
            .unwrap_or(0);
        let whole = cents.checked_div(100).unwrap_or(0);
        let fraction = cents.checked_rem(100).unwrap_or(0);
        format!("{}{whole}.{fraction:02}", self.currency.symbol())
    }
}
