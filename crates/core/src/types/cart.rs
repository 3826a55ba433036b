//! The cart value and its state transitions.

use serde::{Deserialize, Serialize};

use crate::types::{CartLineInput, LineItem, ProductId};

/// The ordered collection of line items for one session.
///
/// A `Cart` is an immutable value: the `with_*` methods return the
/// next cart state and never touch the receiver, so every committed
/// snapshot stays valid for readers that still hold it.
///
/// ## Invariants
///
/// - At most one line item per distinct product ID.
/// - Every stored quantity is strictly positive; a decrement that
///   would reach zero removes the item instead.
///
/// Serialization is transparent over the item list, so the persisted
/// payload is a flat JSON array of line-item records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    /// Find the line item for a product, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.id == *id)
    }

    /// Whether the cart holds an item for this product.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.0.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Next cart state after adding a product.
    ///
    /// If the product is already in the cart its quantity is raised by
    /// one and the candidate's display fields are discarded - a stored
    /// item's fields are never overwritten by a re-add. Otherwise the
    /// candidate is appended with quantity 1.
    #[must_use]
    pub fn with_added(&self, candidate: CartLineInput) -> Self {
        if self.contains(&candidate.id) {
            return self.with_incremented(&candidate.id);
        }

        let mut items = self.0.clone();
        items.push(candidate.into_line_item());
        Self(items)
    }

    /// Next cart state after raising a product's quantity by one.
    ///
    /// An absent product is a no-op: the returned cart is unchanged,
    /// never a fabricated entry.
    #[must_use]
    pub fn with_incremented(&self, id: &ProductId) -> Self {
        Self(
            self.0
                .iter()
                .map(|item| {
                    if item.id == *id {
                        item.with_quantity(item.quantity.saturating_add(1))
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )
    }

    /// Next cart state after lowering a product's quantity by one.
    ///
    /// Dropping to zero removes the line item entirely; an absent
    /// product is a no-op.
    #[must_use]
    pub fn with_decremented(&self, id: &ProductId) -> Self {
        let Some(item) = self.get(id) else {
            return self.clone();
        };

        if item.quantity <= 1 {
            return Self(
                self.0
                    .iter()
                    .filter(|item| item.id != *id)
                    .cloned()
                    .collect(),
            );
        }

        Self(
            self.0
                .iter()
                .map(|item| {
                    if item.id == *id {
                        item.with_quantity(item.quantity - 1)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        )
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn input(id: &str) -> CartLineInput {
        CartLineInput::new(id, format!("Product {id}"), "https://img", Decimal::new(999, 2))
    }

    #[test]
    fn test_add_new_product_appends_with_quantity_one() {
        let cart = Cart::new().with_added(input("p1"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"p1".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_existing_increments_without_duplicating() {
        let cart = Cart::new().with_added(input("p1")).with_added(input("p1"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"p1".into()).unwrap().quantity, 2);
    }

    #[test]
    fn test_readd_keeps_stored_display_fields() {
        let cart = Cart::new().with_added(input("p1"));
        let stale = CartLineInput::new("p1", "Renamed", "https://other", Decimal::ONE);
        let cart = cart.with_added(stale);

        let item = cart.get(&"p1".into()).unwrap();
        assert_eq!(item.title, "Product p1");
        assert_eq!(item.image_url, "https://img");
        assert_eq!(item.price, Decimal::new(999, 2));
    }

    #[test]
    fn test_unique_by_id_across_many_adds() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart = cart.with_added(input("p1")).with_added(input("p2"));
        }
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 10);
    }

    #[test]
    fn test_increment_absent_is_noop() {
        let cart = Cart::new().with_added(input("p1"));
        let next = cart.with_incremented(&"ghost".into());
        assert_eq!(next, cart);
    }

    #[test]
    fn test_decrement_above_one_lowers_quantity() {
        let cart = Cart::new().with_added(input("p1")).with_added(input("p1"));
        let next = cart.with_decremented(&"p1".into());
        assert_eq!(next.get(&"p1".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrement_at_one_removes_item() {
        let cart = Cart::new().with_added(input("p1"));
        let next = cart.with_decremented(&"p1".into());
        assert!(next.get(&"p1".into()).is_none());
        assert!(next.is_empty());
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let cart = Cart::new().with_added(input("p1"));
        let next = cart.with_decremented(&"ghost".into());
        assert_eq!(next, cart);
    }

    #[test]
    fn test_transitions_preserve_insertion_order() {
        let cart = Cart::new()
            .with_added(input("p1"))
            .with_added(input("p2"))
            .with_added(input("p3"))
            .with_incremented(&"p2".into());

        let ids: Vec<&str> = cart.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }

    #[test]
    fn test_transitions_never_mutate_receiver() {
        let cart = Cart::new().with_added(input("p1"));
        let snapshot = cart.clone();

        let _ = cart.with_added(input("p2"));
        let _ = cart.with_incremented(&"p1".into());
        let _ = cart.with_decremented(&"p1".into());

        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cart = Cart::new().with_added(input("p1")).with_added(input("p2"));
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_serde_roundtrip_empty() {
        let json = serde_json::to_string(&Cart::new()).unwrap();
        assert_eq!(json, "[]");

        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_payload_is_flat_array() {
        let cart = Cart::new().with_added(input("p1"));
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with("[{"));
        assert!(json.contains("\"id\":\"p1\""));
    }
}
