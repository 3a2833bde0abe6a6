//! Data Models
//!
//! Cart line items (the persisted format) and catalog products.

use serde::{Deserialize, Serialize};

/// A cart line item, serialized as-is into localStorage under `cartItems`.
///
/// Field names are the persisted-format contract; renaming one silently
/// orphans existing carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Generation-time derived id (millisecond timestamp, stringified)
    pub id: String,
    /// Display name; also the merge key (one line item per distinct name)
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: 1,
        }
    }
}

/// A catalog entry as shown on a product card.
///
/// The price is presentation text (what the card displays); it is coerced
/// to a number at add-to-cart time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price_text: &'static str,
    pub image: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_persisted_field_names() {
        let item = CartItem::new("1716000000000", "Classic Burger", 8.5);
        let json = serde_json::to_string(&item).unwrap();
        // The stored shape must stay readable by carts written before this code
        assert!(json.contains("\"id\":\"1716000000000\""));
        assert!(json.contains("\"name\":\"Classic Burger\""));
        assert!(json.contains("\"price\":8.5"));
        assert!(json.contains("\"qty\":1"));

        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
