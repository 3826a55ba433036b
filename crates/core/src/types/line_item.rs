//! Line item types for the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One distinct product held in the cart, together with how many units
/// of it the cart contains.
///
/// Line items are immutable values once committed to a cart: a
/// quantity change produces a new `LineItem` via [`with_quantity`]
/// rather than mutating in place, so snapshots handed out earlier are
/// never aliased.
///
/// `title`, `image_url`, and `price` are opaque passthrough fields -
/// the cart never validates or computes on them.
///
/// [`with_quantity`]: LineItem::with_quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque, caller-provided product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price. Serialized as a string so precision round-trips
    /// exactly.
    pub price: Decimal,
    /// Units of this product in the cart. Strictly positive while the
    /// item is stored in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Copy of this line item with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// A line item without a quantity: the argument to the cart store's
/// add operation.
///
/// The quantity is decided by the cart itself - a brand-new product
/// enters with quantity 1, and re-adding an existing product raises
/// the stored quantity instead (discarding this input's display
/// fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineInput {
    /// Opaque, caller-provided product identifier. Must be non-empty
    /// by caller contract (unchecked).
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
}

impl CartLineInput {
    /// Create a new cart line input.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Convert into the line item a first add produces.
    #[must_use]
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shirt() -> CartLineInput {
        CartLineInput::new("p1", "Shirt", "https://img/shirt", Decimal::new(1000, 2))
    }

    #[test]
    fn test_into_line_item_starts_at_one() {
        let item = shirt().into_line_item();
        assert_eq!(item.id, ProductId::new("p1"));
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_with_quantity_leaves_original_untouched() {
        let item = shirt().into_line_item();
        let bumped = item.with_quantity(3);
        assert_eq!(item.quantity, 1);
        assert_eq!(bumped.quantity, 3);
        assert_eq!(bumped.title, item.title);
    }

    #[test]
    fn test_price_serializes_as_exact_string() {
        let item = shirt().into_line_item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"10.00\""));

        let parsed: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.price, item.price);
    }
}
