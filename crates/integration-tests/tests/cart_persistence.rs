//! Snapshot persistence through the real file-backed slot.
//!
//! These tests exercise the full persistence contract: every mutation
//! writes the slot, a fresh store restores the exact line list, and
//! anything malformed on disk opens as an empty cart.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use driftwood_cart::{CartConfig, CartStore, FileStorage, NullNotifier};
use driftwood_core::{CartLine, ProductId};
use driftwood_integration_tests::{init_tracing, product, qty};

/// Open a store over a file slot rooted at `dir`.
fn open_cart(dir: &Path) -> CartStore {
    init_tracing();
    let config = CartConfig::default();
    let storage = FileStorage::open(dir).expect("Failed to open file storage");
    CartStore::open(&config, Box::new(storage), Box::new(NullNotifier))
}

/// Path of the slot file `CartConfig::default()` writes under `dir`.
fn slot_path(dir: &Path) -> std::path::PathBuf {
    dir.join("cartStore.json")
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[test]
fn test_snapshot_roundtrip_preserves_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(3, "Walnut Tray", "42.00"), qty(1));
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(2));
    cart.add_item(&product(2, "Linen Napkins", "28.50"), qty(4));
    let before: Vec<CartLine> = cart.lines().to_vec();
    drop(cart);

    let restored = open_cart(dir.path());
    assert_eq!(restored.lines(), before.as_slice());
    assert_eq!(restored.item_count(), 7);
}

#[test]
fn test_restored_cart_keeps_merging_correctly() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(2));
    drop(cart);

    // A later session re-adds the same product with changed catalog data:
    // the restored line keeps its original snapshot, only the quantity
    // grows.
    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug (new)", "15.00"), qty(1));

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].title, "Enamel Mug");
    assert_eq!(cart.lines()[0].unit_price, "14.00".parse().unwrap());
    assert_eq!(cart.lines()[0].quantity, qty(3));
}

#[test]
fn test_cleared_cart_restores_empty() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(2));
    cart.clear();
    drop(cart);

    let restored = open_cart(dir.path());
    assert!(restored.is_empty());
}

#[test]
fn test_slot_holds_a_json_array_of_lines() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(2));
    drop(cart);

    let raw = fs::read_to_string(slot_path(dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let lines = value.as_array().expect("slot should hold a JSON array");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["product_id"], 1);
    assert_eq!(lines[0]["title"], "Enamel Mug");
    assert_eq!(lines[0]["quantity"], 2);
}

// ============================================================================
// Malformed Slot Recovery
// ============================================================================

#[test]
fn test_malformed_slot_contents_open_empty() {
    for garbage in [
        "",
        "not json",
        "{\"items\": []}",
        "[{\"product_id\": 1}]",
        "[{\"product_id\": 1, \"title\": \"Mug\", \"unit_price\": \"8.00\", \
          \"thumbnail\": \"t.jpg\", \"quantity\": 0}]",
        "[{\"product_id\": 1, \"title\": \"Mug\", \"unit_price\": \"-8.00\", \
          \"thumbnail\": \"t.jpg\", \"quantity\": 1}]",
    ] {
        let dir = tempfile::tempdir().unwrap();
        fs::write(slot_path(dir.path()), garbage).unwrap();

        let cart = open_cart(dir.path());
        assert!(cart.is_empty(), "expected empty cart for slot {garbage:?}");
    }
}

#[test]
fn test_malformed_slot_is_replaced_on_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(slot_path(dir.path()), "corrupted").unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(1));
    drop(cart);

    let restored = open_cart(dir.path());
    assert_eq!(restored.item_count(), 1);
}

#[test]
fn test_remove_and_update_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open_cart(dir.path());
    cart.add_item(&product(1, "Enamel Mug", "14.00"), qty(2));
    cart.add_item(&product(2, "Linen Napkins", "28.50"), qty(1));
    cart.update_quantity(ProductId::new(2), 6);
    cart.remove_item(ProductId::new(1));
    drop(cart);

    let restored = open_cart(dir.path());
    assert_eq!(restored.lines().len(), 1);
    assert_eq!(restored.lines()[0].product_id, ProductId::new(2));
    assert_eq!(restored.lines()[0].quantity, qty(6));
}
