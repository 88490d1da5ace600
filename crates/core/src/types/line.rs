//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;
use crate::types::product::ProductSummary;
use crate::types::quantity::Quantity;

/// One product's entry in the cart.
///
/// Title, unit price, and thumbnail are snapshots taken when the product
/// was first added; they are not re-synced if the product record changes
/// later. The line's identity is its `product_id` - a cart never holds two
/// lines for the same product.
///
/// Because [`Quantity`] and [`Price`] validate on deserialization, a
/// persisted snapshot containing a zero quantity or negative price fails
/// to load as a whole, which the cart treats as an absent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identifier of the underlying product; unique within a cart.
    pub product_id: ProductId,
    /// Display title, snapshot at add time.
    pub title: String,
    /// Unit price, snapshot at add time.
    pub unit_price: Price,
    /// Opaque thumbnail reference, snapshot at add time.
    pub thumbnail: String,
    /// Units of this product in the cart; always at least 1.
    pub quantity: Quantity,
}

impl CartLine {
    /// Build a line from a product's current fields.
    #[must_use]
    pub fn new(product: &ProductSummary, quantity: Quantity) -> Self {
        Self {
            product_id: product.id(),
            title: product.title().to_owned(),
            unit_price: product.price(),
            thumbnail: product.thumbnail().to_owned(),
            quantity,
        }
    }

    /// The line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.unit_price.times(self.quantity.get())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, title: &str, price: &str) -> ProductSummary {
        ProductSummary::new(
            ProductId::new(id),
            title,
            price.parse().unwrap(),
            format!("img/{id}.jpg"),
        )
        .unwrap()
    }

    #[test]
    fn test_new_snapshots_product_fields() {
        let line = CartLine::new(&product(1, "Mug", "8.00"), Quantity::new(2).unwrap());
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.title, "Mug");
        assert_eq!(line.unit_price, "8.00".parse().unwrap());
        assert_eq!(line.thumbnail, "img/1.jpg");
        assert_eq!(line.quantity.get(), 2);
    }

    #[test]
    fn test_total() {
        let line = CartLine::new(&product(1, "Mug", "8.50"), Quantity::new(3).unwrap());
        assert_eq!(line.total().to_string(), "$25.50");
    }

    #[test]
    fn test_serde_roundtrip_preserves_fields() {
        let line = CartLine::new(&product(7, "Lamp", "24.99"), Quantity::new(4).unwrap());
        let json = serde_json::to_string(&line).unwrap();
        let parsed: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = r#"{
            "product_id": 1,
            "title": "Mug",
            "unit_price": "8.00",
            "thumbnail": "img/1.jpg",
            "quantity": 0
        }"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }
}
