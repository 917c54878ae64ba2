//! Display-price parsing using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a display price.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The numeric portion failed to parse.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A listing price.
///
/// The backend ships prices as currency-formatted display strings
/// (`"$10.00"`); this type parses them by stripping the single leading
/// currency symbol and keeps the amount as a [`Decimal`] so cart totals
/// stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a currency-formatted display string such as `"$10.00"`.
    ///
    /// The first character is treated as the currency symbol and stripped;
    /// a bare numeric string is also accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the input is empty or the remainder is not
    /// a decimal number.
    pub fn parse_display(s: &str) -> Result<Self, PriceError> {
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let numeric = s.strip_prefix('$').unwrap_or(s);
        numeric
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| PriceError::Invalid(s.to_owned()))
    }

    /// The amount in the currency's standard unit.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Format for display (e.g. `"$19.99"`).
    #[must_use]
    pub fn display(self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_display_with_symbol() {
        let price = Price::parse_display("$10.00").unwrap();
        assert_eq!(price.amount(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_parse_display_bare_number() {
        let price = Price::parse_display("5.50").unwrap();
        assert_eq!(price.amount(), Decimal::new(550, 2));
    }

    #[test]
    fn test_parse_display_empty() {
        assert!(matches!(Price::parse_display(""), Err(PriceError::Empty)));
    }

    #[test]
    fn test_parse_display_garbage() {
        assert!(matches!(
            Price::parse_display("$ten"),
            Err(PriceError::Invalid(_))
        ));
    }

    #[test]
    fn test_display_format() {
        let price = Price::parse_display("$7.5").unwrap();
        assert_eq!(price.display(), "$7.50");
        assert_eq!(format!("{price}"), "$7.50");
    }
}
