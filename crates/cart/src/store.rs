//! The cart state container.

use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use driftwood_core::{CartLine, ProductId, ProductSummary, Quantity};

use crate::config::CartConfig;
use crate::events::CartEvent;
use crate::notify::NotificationSink;
use crate::storage::StorageAdapter;

/// The authoritative cart state and its durable persistence.
///
/// A `CartStore` owns an ordered collection of [`CartLine`]s keyed by
/// product id. It is constructed explicitly and handed to consumers -
/// there is no ambient global. All mutation goes through the four
/// operations ([`add_item`](Self::add_item),
/// [`remove_item`](Self::remove_item),
/// [`update_quantity`](Self::update_quantity), [`clear`](Self::clear));
/// readers get shared views of committed state.
///
/// Every state-changing mutation serializes the full line collection to
/// the configured storage slot and then notifies subscribed observers.
/// Persistence is fire-and-forget: a failed write is logged and the
/// in-memory mutation stands.
///
/// The store is single-threaded by design; mutations are serialized by
/// the hosting event loop, so there is no internal locking.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn StorageAdapter>,
    notifier: Box<dyn NotificationSink>,
    observers: Vec<Box<dyn Fn(&CartEvent)>>,
    storage_key: String,
}

impl CartStore {
    /// Open a cart over the given storage backend.
    ///
    /// If the storage slot holds a prior snapshot it becomes the initial
    /// state; an absent, unreadable, or malformed snapshot yields an empty
    /// cart. Malformed data never surfaces as an error.
    #[must_use]
    pub fn open(
        config: &CartConfig,
        storage: Box<dyn StorageAdapter>,
        notifier: Box<dyn NotificationSink>,
    ) -> Self {
        let lines = load_snapshot(storage.as_ref(), &config.storage_key);
        Self {
            lines,
            storage,
            notifier,
            observers: Vec::new(),
            storage_key: config.storage_key.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If the product already has a line, its quantity grows by
    /// `quantity`; position, title, price, and thumbnail stay as they were
    /// snapshot at first add. Otherwise a new line is appended from the
    /// product's current fields. Either way a success notification naming
    /// the product goes to the sink.
    #[instrument(skip(self, product), fields(id = %product.id()))]
    pub fn add_item(&mut self, product: &ProductSummary, quantity: Quantity) {
        let id = product.id();
        let merged = match self.lines.iter_mut().find(|l| l.product_id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(product, quantity));
                quantity
            }
        };
        debug!(quantity = %merged, "item added");

        self.persist();
        self.notifier
            .success(&format!("{} added to cart", product.title()));
        self.emit(&CartEvent::ItemAdded {
            id,
            quantity: merged,
        });
    }

    /// Remove the line for `id`, if present.
    ///
    /// Removing an absent id is a no-op, not an error; calling twice in a
    /// row leaves the same state as calling once.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != id);
        if self.lines.len() == before {
            return;
        }
        debug!("item removed");

        self.persist();
        self.emit(&CartEvent::ItemRemoved { id });
    }

    /// Set the line for `id` to an absolute quantity.
    ///
    /// A non-positive `quantity` is equivalent to
    /// [`remove_item`](Self::remove_item). An absent id, or a quantity
    /// equal to the line's current one, is a no-op.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        let Some(quantity) = Quantity::from_signed(quantity) else {
            self.remove_item(id);
            return;
        };

        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == id) else {
            return;
        };
        if line.quantity == quantity {
            return;
        }
        line.quantity = quantity;
        debug!(quantity = %quantity, "quantity updated");

        self.persist();
        self.emit(&CartEvent::QuantityChanged { id, quantity });
    }

    /// Empty the cart.
    ///
    /// Clearing an already-empty cart changes nothing and emits no event.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        debug!("cart cleared");

        self.persist();
        self.emit(&CartEvent::Cleared);
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// The line items, in display (insertion) order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total unit count across all lines; the badge number.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| u64::from(l.quantity.get()))
            .sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    /// Register an observer for committed changes.
    ///
    /// Observers are invoked synchronously, in registration order, after
    /// the mutation has been applied and persisted. They receive the event
    /// only; views are re-read from the store afterwards.
    pub fn subscribe(&mut self, observer: impl Fn(&CartEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&self, event: &CartEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }

    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.lines) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to serialize cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &snapshot) {
            warn!(error = %e, key = %self.storage_key, "failed to persist cart snapshot");
        }
    }
}

/// Load and validate the prior snapshot, treating anything malformed as
/// absent.
fn load_snapshot(storage: &dyn StorageAdapter, key: &str) -> Vec<CartLine> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, key, "failed to read cart snapshot; starting empty");
            return Vec::new();
        }
    };

    let lines: Vec<CartLine> = match serde_json::from_str(&raw) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(error = %e, key, "malformed cart snapshot; starting empty");
            return Vec::new();
        }
    };

    // A foreign writer could store duplicate ids; this store never does.
    let mut seen = HashSet::new();
    if lines.iter().any(|l| !seen.insert(l.product_id)) {
        warn!(key, "cart snapshot has duplicate product ids; starting empty");
        return Vec::new();
    }

    lines
}
