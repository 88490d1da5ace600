//! Change events for reactive views.

use driftwood_core::{ProductId, Quantity};

/// A committed change to the cart.
///
/// Events are delivered synchronously to subscribed observers after the
/// mutation has been applied and the snapshot persisted, so an observer
/// that re-reads the derived views sees the post-commit state. Mutations
/// that change nothing (removing an absent id, setting a quantity to its
/// current value) emit no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added; `quantity` is the line's quantity after the
    /// merge, not the increment.
    ItemAdded {
        /// Product whose line changed.
        id: ProductId,
        /// The line's resulting quantity.
        quantity: Quantity,
    },
    /// A line was removed, either directly or by a non-positive update.
    ItemRemoved {
        /// Product whose line was removed.
        id: ProductId,
    },
    /// A line's quantity was set to a new absolute value.
    QuantityChanged {
        /// Product whose line changed.
        id: ProductId,
        /// The new quantity.
        quantity: Quantity,
    },
    /// The cart was emptied.
    Cleared,
}
