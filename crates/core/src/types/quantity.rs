//! Line-item quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The quantity is zero; a line item always carries at least one unit.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A positive line-item quantity.
///
/// Every line item in a cart carries `quantity >= 1`; a quantity of zero
/// means the line does not exist. Construction enforces this, so a zero
/// quantity is unrepresentable once past the boundary.
///
/// ## Examples
///
/// ```
/// use driftwood_core::Quantity;
///
/// let two = Quantity::new(2).unwrap();
/// assert_eq!(two.get(), 2);
///
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of one, the `add_item` default.
    pub const ONE: Self = Self(1);

    /// Create a `Quantity` from a unit count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, QuantityError> {
        if count == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(count))
    }

    /// Convert a signed count into a `Quantity`.
    ///
    /// Returns `None` for zero or negative counts (the caller treats those
    /// as a removal); counts above `u32::MAX` saturate.
    #[must_use]
    pub fn from_signed(count: i64) -> Option<Self> {
        if count <= 0 {
            return None;
        }
        Some(Self(u32::try_from(count).unwrap_or(u32::MAX)))
    }

    /// Get the unit count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Add two quantities, saturating at `u32::MAX`.
    ///
    /// Merging a re-added product into its existing line uses this, so an
    /// absurd merge keeps the maximum count instead of wrapping to zero.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
