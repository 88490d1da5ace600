//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative unit price.
///
/// The amount is stored as a [`Decimal`] in the currency's standard unit
/// (e.g., dollars, not cents), so snapshots round-trip without floating
/// point drift. Construction validates that the amount is not negative.
///
/// ## Examples
///
/// ```
/// use driftwood_core::Price;
///
/// let price: Price = "19.99".parse().unwrap();
/// assert_eq!(price.to_string(), "$19.99");
///
/// assert!("-1".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply the unit price by a count, for line totals.
    ///
    /// Saturates at the maximum representable amount instead of wrapping.
    #[must_use]
    pub fn times(&self, count: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(count))
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Add two prices, saturating at the maximum representable amount.
    #[must_use]
    pub fn saturating_add(&self, other: Self) -> Self {
        Self(self.0.checked_add(other.0).unwrap_or(Decimal::MAX))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: Decimal = s
            .trim()
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }
}
