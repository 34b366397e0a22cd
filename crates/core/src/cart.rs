//! Shopping cart line items and operations.
//!
//! The cart is an insertion-ordered collection of [`CartLine`] values, keyed
//! by product identifier: at most one line per product, quantity always at
//! least 1. It is a pure in-memory collection - persistence is the
//! storefront's job, through an explicitly injected store with its own save
//! call, not a hidden write-through on every mutation.
//!
//! The serialized form is a plain JSON array with camelCase field names and
//! an optional `cashPrice`; unknown fields are ignored on load so older slot
//! files keep deserializing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::price::parse_amount;

/// One cart entry: a product and its requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier (the catalog slug).
    pub id: String,
    pub name: String,
    /// List price display string.
    pub price: String,
    /// Discounted transfer/cash price, when the product has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_price: Option<String>,
    pub image: String,
    pub slug: String,
    /// Always >= 1; decrementing to zero removes the line instead.
    pub quantity: u32,
}

impl CartLine {
    /// The price a line is charged at: the cash price when present,
    /// otherwise the list price.
    #[must_use]
    pub fn effective_price(&self) -> &str {
        self.cash_price.as_deref().unwrap_or(&self.price)
    }

    /// Parsed per-unit amount; zero for malformed price strings.
    #[must_use]
    pub fn unit_amount(&self) -> Decimal {
        parse_amount(self.effective_price())
    }
}

/// The shopping cart: an ordered sequence of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same `id` exists its quantity is incremented by
    /// `item.quantity`; otherwise the item is appended. A zero quantity is
    /// treated as 1 to keep the quantity invariant.
    pub fn add(&mut self, mut item: CartLine) {
        item.quantity = item.quantity.max(1);
        if let Some(existing) = self.lines.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += item.quantity;
        } else {
            self.lines.push(item);
        }
    }

    /// Remove the line with the given id; no-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    /// Set the quantity of a line. Zero removes the line entirely; ids not
    /// in the cart are ignored. No upper bound is enforced.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
        }
    }

    /// Cart total: sum of the effective per-unit price times quantity.
    /// Malformed prices contribute zero.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.unit_amount() * Decimal::from(line.quantity))
            .sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, price: &str, cash_price: Option<&str>, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: format!("Producto {id}"),
            price: price.to_string(),
            cash_price: cash_price.map(String::from),
            image: "/static/images/test.jpg".to_string(),
            slug: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", None, 2));
        cart.add(line("sofa", "$100.000", None, 3));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 5);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add(line("a", "$100", None, 1));
        cart.add(line("b", "$200", None, 1));
        cart.add(line("a", "$100", None, 1));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", None, 2));
        cart.update_quantity("sofa", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", None, 2));
        cart.update_quantity("sofa", 7);
        assert_eq!(cart.lines().first().unwrap().quantity, 7);
        // Unknown id is a no-op.
        cart.update_quantity("mesa", 3);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", None, 1));
        cart.remove("mesa");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_total_prefers_cash_price() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", Some("$85.000"), 2));
        cart.add(line("mesa", "$50.000", None, 1));
        assert_eq!(cart.total(), Decimal::from(220_000));
    }

    #[test]
    fn test_total_malformed_price_counts_zero() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "consultar", None, 3));
        cart.add(line("mesa", "$50.000", None, 1));
        assert_eq!(cart.total(), Decimal::from(50_000));
    }

    #[test]
    fn test_total_items() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        cart.add(line("sofa", "$100.000", None, 2));
        cart.add(line("mesa", "$50.000", None, 3));
        assert_eq!(cart.total_items(), 5);
        cart.clear();
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_zero_quantity_add_becomes_one() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", None, 0));
        assert_eq!(cart.lines().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_serde_slot_format() {
        let mut cart = Cart::new();
        cart.add(line("sofa", "$100.000", Some("$85.000"), 2));
        let json = serde_json::to_string(&cart).unwrap();
        // Wire format is a plain array with camelCase fields.
        assert!(json.starts_with('['));
        assert!(json.contains("\"cashPrice\":\"$85.000\""));

        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_serde_tolerates_unknown_and_missing_fields() {
        let json = r#"[{
            "id": "sofa",
            "name": "Sofá",
            "price": "$100.000",
            "image": "/img.jpg",
            "slug": "sofa",
            "quantity": 1,
            "legacyField": true
        }]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().cash_price, None);
    }
}
