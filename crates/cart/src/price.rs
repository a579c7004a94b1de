//! Exact money amounts.
//!
//! Prices are kept in minor units (1/100 of the currency unit) so totals never
//! drift. They cross the persistence boundary as plain decimal JSON numbers
//! (`12.5`), which is also how the menu and the browser snapshot spell them.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cart_error::CartError;
use crate::config::CURRENCY_SUFFIX;

const MINOR_PER_UNIT: u64 = 100;

/// A non-negative amount of money in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_minor(minor: u64) -> Self {
        Price(minor)
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Parses user-facing price text such as `"120"` or `" 45.50 "`.
    pub fn parse(text: &str) -> Result<Self, CartError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CartError::InvalidPrice(text.to_string()));
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| CartError::InvalidPrice(text.to_string()))?;
        Self::from_decimal(value).map_err(|err| match err {
            CartError::NegativePrice(_) => CartError::NegativePrice(text.to_string()),
            _ => CartError::InvalidPrice(text.to_string()),
        })
    }

    /// Converts a decimal amount, rounding to the nearest minor unit.
    pub fn from_decimal(value: f64) -> Result<Self, CartError> {
        if !value.is_finite() {
            return Err(CartError::InvalidPrice(value.to_string()));
        }
        if value < 0.0 {
            return Err(CartError::NegativePrice(value.to_string()));
        }
        let minor = (value * MINOR_PER_UNIT as f64).round();
        if minor > u64::MAX as f64 {
            return Err(CartError::InvalidPrice(value.to_string()));
        }
        Ok(Price(minor as u64))
    }

    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / MINOR_PER_UNIT as f64
    }

    /// Line subtotal for `quantity` units.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_UNIT,
            self.0 % MINOR_PER_UNIT
        )
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Price::from_decimal(value).map_err(serde::de::Error::custom)
    }
}

/// Formats a price for display: two decimals and the currency suffix.
pub fn format_price(price: Price) -> String {
    format!("{price} {CURRENCY_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(Price::parse("120").unwrap(), Price::from_minor(12_000));
        assert_eq!(Price::parse(" 45.5 ").unwrap(), Price::from_minor(4_550));
        assert_eq!(Price::parse("0.1").unwrap(), Price::from_minor(10));
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rounds_to_minor_units() {
        assert_eq!(Price::parse("19.999").unwrap(), Price::from_minor(2_000));
        assert_eq!(Price::parse("0.004").unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            Price::parse("-5"),
            Err(CartError::NegativePrice("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "   ", "abc", "12abc", "NaN", "inf", "-inf"] {
            assert!(
                matches!(Price::parse(text), Err(CartError::InvalidPrice(_))),
                "{text:?} should be rejected as invalid"
            );
        }
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_minor(12_000).to_string(), "120.00");
        assert_eq!(Price::from_minor(5).to_string(), "0.05");
        assert_eq!(format_price(Price::from_minor(4_550)), "45.50 ₽");
    }

    #[test]
    fn test_times_and_sum() {
        let coffee = Price::from_minor(1_550);
        assert_eq!(coffee.times(3), Price::from_minor(4_650));
        assert_eq!(coffee.times(0), Price::ZERO);
        let total: Price = [coffee, coffee.times(2), Price::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_minor(4_651));
    }

    #[test]
    fn test_serde_as_decimal_number() {
        let json = serde_json::to_string(&Price::from_minor(1_250)).unwrap();
        assert_eq!(json, "12.5");
        let back: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, Price::from_minor(1_250));
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }
}
