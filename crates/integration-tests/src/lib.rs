//! Integration tests for Driftwood Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p driftwood-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - snapshot round-trips through the real
//!   file-backed storage slot, including recovery from malformed data
//! - `cart_operations` - the full add/update/remove flow as the grid and
//!   drawer collaborators drive it
//!
//! This crate also provides shared fixtures for those tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use driftwood_core::{ProductId, ProductSummary, Quantity};
use tracing_subscriber::EnvFilter;

/// Initialize tracing output for a test run.
///
/// Respects `RUST_LOG`; safe to call from every test (later calls are
/// no-ops).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a validated product record fixture.
///
/// # Panics
///
/// Panics on an invalid fixture definition; tests only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: i32, title: &str, price: &str) -> ProductSummary {
    ProductSummary::new(
        ProductId::new(id),
        title,
        price.parse().unwrap(),
        format!("https://cdn.example.com/{id}/thumb.jpg"),
    )
    .unwrap()
}

/// Build a quantity fixture.
///
/// # Panics
///
/// Panics on zero; tests only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn qty(count: u32) -> Quantity {
    Quantity::new(count).unwrap()
}
