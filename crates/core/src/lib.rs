//! Driftwood Core - Shared domain types.
//!
//! This crate provides the types shared between the cart engine and its UI
//! collaborators:
//! - `cart` - The cart engine (state container, storage, notifications)
//! - grid / drawer components - consumers of the derived read views
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! logging side effects. Validation happens here, at construction, so that
//! an invariant-violating value never reaches the cart engine.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, and quantities, the
//!   narrow product record the cart consumes, and the cart line item

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
