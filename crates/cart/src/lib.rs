//! Driftwood Cart - Persisted client-side cart engine.
//!
//! The cart engine owns the authoritative cart state: an ordered, unique
//! collection of line items. UI collaborators (product grid, cart drawer)
//! call its mutation operations, read its derived views, and subscribe to
//! change events to re-render. State survives restarts through a durable
//! key-value slot behind a small storage-adapter seam.
//!
//! # Architecture
//!
//! - [`CartStore`] - the state container; merge-on-add, absolute-set or
//!   remove on update, snapshot persisted after every mutation
//! - [`StorageAdapter`] - the durable-slot capability, with file-backed
//!   and in-memory implementations
//! - [`NotificationSink`] - fire-and-forget success toasts
//! - [`CartEvent`] - synchronous change notification for reactive views
//! - [`CartView`] - display projections with formatted prices, built by
//!   the consuming collaborator
//!
//! # Quick start
//!
//! ```
//! use driftwood_cart::{CartConfig, CartStore, MemoryStorage, NullNotifier};
//! use driftwood_core::{ProductId, ProductSummary, Quantity};
//!
//! let config = CartConfig::default();
//! let mut cart = CartStore::open(
//!     &config,
//!     Box::new(MemoryStorage::default()),
//!     Box::new(NullNotifier),
//! );
//!
//! let product = ProductSummary::new(
//!     ProductId::new(1),
//!     "Enamel Mug",
//!     "14.00".parse().unwrap(),
//!     "img/mug.jpg",
//! )
//! .unwrap();
//!
//! cart.add_item(&product, Quantity::new(2).unwrap());
//! assert_eq!(cart.item_count(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod events;
pub mod notify;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{CartConfig, ConfigError};
pub use events::CartEvent;
pub use notify::{LogNotifier, NotificationSink, NullNotifier};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, StorageError};
pub use store::CartStore;
pub use view::{CartLineView, CartView};
