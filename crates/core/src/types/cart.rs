//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// A line item in the cart: a product plus a quantity.
///
/// Identity is the product id, unique per cart. A quantity of 0 is allowed
/// to persist (specific-item checkout zeroes quantities in place instead of
/// removing the entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total: price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;
    use crate::types::price::Price;

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Premium Watch".to_string(),
            price: Price::from_cents(29999),
            image: "https://example.com/watch.jpg".to_string(),
            category: "Accessories".to_string(),
            description: "Elegant timepiece.".to_string(),
        }
    }

    #[test]
    fn test_new_starts_at_quantity_one() {
        let item = CartItem::new(product());
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut item = CartItem::new(product());
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::new(89997, 2));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let mut item = CartItem::new(product());
        item.quantity = 0;
        assert_eq!(item.line_total(), Decimal::ZERO);
    }
}
