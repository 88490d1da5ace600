//! Display projections for UI collaborators.
//!
//! The drawer and grid render from these read models, not from the
//! store's internal state. Prices arrive pre-formatted as strings, and
//! the subtotal is computed here - the store itself never totals money.

use driftwood_core::{CartLine, Price};

/// Line-item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Underlying product id, as a plain integer for templating.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Thumbnail reference.
    pub thumbnail: String,
    /// Unit count.
    pub quantity: u32,
    /// Formatted unit price (e.g. `$8.00`).
    pub unit_price: String,
    /// Formatted line total (e.g. `$16.00`).
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id.as_i32(),
            title: line.title.clone(),
            thumbnail: line.thumbnail.clone(),
            quantity: line.quantity.get(),
            unit_price: line.unit_price.to_string(),
            line_total: line.total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Line items in display order.
    pub lines: Vec<CartLineView>,
    /// Formatted sum of line totals.
    pub subtotal: String,
    /// Total unit count; the badge number.
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&[CartLine]> for CartView {
    fn from(lines: &[CartLine]) -> Self {
        let subtotal = lines
            .iter()
            .map(CartLine::total)
            .fold(Price::ZERO, |acc, total| acc.saturating_add(total));
        Self {
            lines: lines.iter().map(CartLineView::from).collect(),
            subtotal: subtotal.to_string(),
            item_count: lines.iter().map(|l| u64::from(l.quantity.get())).sum(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use driftwood_core::{ProductId, ProductSummary, Quantity};

    use super::*;

    fn line(id: i32, title: &str, price: &str, quantity: u32) -> CartLine {
        let product = ProductSummary::new(
            ProductId::new(id),
            title,
            price.parse().unwrap(),
            format!("img/{id}.jpg"),
        )
        .unwrap();
        CartLine::new(&product, Quantity::new(quantity).unwrap())
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.lines.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_view_from_lines() {
        let lines = vec![line(1, "Mug", "8.00", 2), line(2, "Lamp", "24.50", 1)];
        let view = CartView::from(lines.as_slice());

        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$40.50");

        let first = &view.lines[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "Mug");
        assert_eq!(first.unit_price, "$8.00");
        assert_eq!(first.line_total, "$16.00");
    }

    #[test]
    fn test_view_of_no_lines_matches_empty() {
        let no_lines: Vec<CartLine> = Vec::new();
        assert_eq!(CartView::from(no_lines.as_slice()), CartView::empty());
    }
}
