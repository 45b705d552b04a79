//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`rust_decimal::Decimal`] so that cart totals never
//! accumulate floating point drift (299.99 stays 299.99).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code: CurrencyCode::USD,
        }
    }
}

impl std::fmt::Display for Price {
    /// Format for display (e.g., "$19.99").
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(29999);
        assert_eq!(price.amount, Decimal::new(29999, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_cents(29999).to_string(), "$299.99");
        assert_eq!(Price::from_cents(7000).to_string(), "$70.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "\u{20ac}");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
    }
}
