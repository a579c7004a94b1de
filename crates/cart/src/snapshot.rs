//! JSON snapshot of the cart, as stored under [`STORAGE_KEY`].
//!
//! Format: `{"<id>": {"name": "...", "price": 12.5, "quantity": 2}, ...}`.
//! Decoding is lenient per entry: entries that are not objects, or lines with
//! an empty name, a missing or bad price or a non-positive quantity, are dropped
//! with a warning. Only a document that is not a JSON object is corrupt.
//!
//! [`STORAGE_KEY`]: crate::config::STORAGE_KEY

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::cart_error::SnapshotError;
use crate::cart_state::{Cart, LineItem};
use crate::price::Price;

/// Entry as it appears on disk; validated before it becomes a [`LineItem`].
#[derive(Deserialize)]
struct StoredLine {
    #[serde(default)]
    name: String,
    price: Option<f64>,
    #[serde(default)]
    quantity: f64,
}

pub fn encode_snapshot(cart: &Cart) -> Result<String, SnapshotError> {
    serde_json::to_string(cart.lines()).map_err(|e| SnapshotError::Encode(e.to_string()))
}

pub fn decode_snapshot(text: &str) -> Result<Cart, SnapshotError> {
    if text.trim().is_empty() {
        return Ok(Cart::default());
    }
    let stored: BTreeMap<String, Value> =
        serde_json::from_str(text).map_err(|e| SnapshotError::Corrupt(e.to_string()))?;

    let mut cart = Cart::default();
    for (id, value) in stored {
        let line = StoredLine::deserialize(value)
            .ok()
            .and_then(|entry| validate_line(&id, entry));
        match line {
            Some(line) => cart.restore_line(id, line),
            None => warn!("Dropping invalid cart snapshot entry {id:?}"),
        }
    }
    Ok(cart)
}

fn validate_line(id: &str, entry: StoredLine) -> Option<LineItem> {
    if id.trim().is_empty() || entry.name.trim().is_empty() {
        return None;
    }
    let price = Price::from_decimal(entry.price?).ok()?;
    let quantity = entry.quantity;
    if !quantity.is_finite() || quantity < 1.0 || quantity.fract() != 0.0 || quantity > u32::MAX as f64
    {
        return None;
    }
    Some(LineItem::new(entry.name, price, quantity as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::default();
        cart.add("latte", "Латте", "180").unwrap();
        cart.add("latte", "Латте", "180").unwrap();
        cart.add("syrniki", "Сырники <домашние>", "245.90").unwrap();
        cart
    }

    #[test]
    fn test_snapshot_round_trip() {
        let cart = sample_cart();
        let text = encode_snapshot(&cart).unwrap();
        assert_eq!(decode_snapshot(&text).unwrap(), cart);
    }

    #[test]
    fn test_snapshot_format_matches_browser_script() {
        let mut cart = Cart::default();
        cart.add("tea", "Чай", "90.5").unwrap();
        let text = encode_snapshot(&cart).unwrap();
        assert_eq!(text, r#"{"tea":{"name":"Чай","price":90.5,"quantity":1}}"#);
    }

    #[test]
    fn test_decode_blank_is_empty_cart() {
        assert!(decode_snapshot("").unwrap().is_empty());
        assert!(decode_snapshot("  \n").unwrap().is_empty());
        assert!(decode_snapshot("{}").unwrap().is_empty());
    }

    #[test]
    fn test_decode_corrupt_json() {
        for text in ["{not json", "null", "[1,2,3]", "\"cafeCart\""] {
            assert!(
                matches!(decode_snapshot(text), Err(SnapshotError::Corrupt(_))),
                "{text:?} should be corrupt"
            );
        }
    }

    #[test]
    fn test_decode_drops_invalid_entries() {
        let text = r#"{
            "ok": {"name": "Чай", "price": 90, "quantity": 2},
            "zero": {"name": "Кофе", "price": 150, "quantity": 0},
            "negative": {"name": "Сок", "price": -1, "quantity": 1},
            "fraction": {"name": "Вода", "price": 50, "quantity": 1.5},
            "nameless": {"price": 10, "quantity": 1}
        }"#;
        let cart = decode_snapshot(text).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("ok"), 2);
        assert_eq!(cart.get("ok").unwrap().price, Price::from_minor(9_000));
    }

    #[test]
    fn test_decode_keeps_valid_lines_next_to_malformed_entries() {
        let text = r#"{
            "ok": {"name": "Чай", "price": 90, "quantity": 2},
            "null": null,
            "number": 7,
            "string_quantity": {"name": "Кофе", "price": 150, "quantity": "2"},
            "null_price": {"name": "Сок", "price": null, "quantity": 1},
            "list": [1, 2]
        }"#;
        let cart = decode_snapshot(text).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("ok"), 2);
    }

    #[test]
    fn test_decode_drops_entry_without_price() {
        let text = r#"{
            "priceless": {"name": "X", "quantity": 2},
            "tea": {"name": "Чай", "price": 90.5, "quantity": 1}
        }"#;
        let cart = decode_snapshot(text).unwrap();
        assert!(cart.get("priceless").is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_minor(9_050));
    }
}
