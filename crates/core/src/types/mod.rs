//! Core types for Driftwood Cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use line::CartLine;
pub use price::{Price, PriceError};
pub use product::{ProductError, ProductSummary};
pub use quantity::{Quantity, QuantityError};
