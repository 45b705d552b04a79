//! The product catalog.
//!
//! The catalog is the single source of truth for products: the home page
//! grid, the cart's add buttons, and the assistant's name lookup all read
//! from it. It is a static configuration table, defined once at startup.

use velvet_lane_core::{Price, Product, ProductId};

/// The fixed, ordered set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match against product names.
    ///
    /// Returns the first matching product in catalog order. Ambiguous
    /// queries silently resolve to the first match; this is a deliberate
    /// simplification, not a ranking algorithm.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .find(|p| p.name.to_lowercase().contains(&query))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: sample_products(),
        }
    }
}

/// Helper to keep the product table below readable.
fn product(
    id: i32,
    name: &str,
    cents: i64,
    image: &str,
    category: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents),
        image: image.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}

/// The demo product table.
fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Watch",
            29999,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
            "Accessories",
            "Elegant timepiece with premium materials and precise movement.",
        ),
        product(
            2,
            "Running Shoes",
            12999,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
            "Footwear",
            "Comfortable running shoes with advanced cushioning technology.",
        ),
        product(
            3,
            "Leather Wallet",
            7999,
            "https://images.unsplash.com/photo-1627123424574-724758594e93",
            "Accessories",
            "Handcrafted genuine leather wallet with multiple card slots.",
        ),
        product(
            4,
            "Wireless Headphones",
            19999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
            "Electronics",
            "Premium wireless headphones with noise cancellation.",
        ),
        product(
            5,
            "Smart Fitness Band",
            8999,
            "https://images.unsplash.com/photo-1557438159-51eec7a6c9e8",
            "Electronics",
            "Track your fitness goals with this advanced smart band.",
        ),
        product(
            6,
            "Formal Shoes",
            15999,
            "https://images.unsplash.com/photo-1614252369475-531eba835eb1",
            "Footwear",
            "Classic formal shoes perfect for business attire.",
        ),
        product(
            7,
            "Sunglasses",
            14999,
            "https://images.unsplash.com/photo-1572635196237-14b3f281503f",
            "Accessories",
            "Stylish sunglasses with UV protection.",
        ),
        product(
            8,
            "Laptop Backpack",
            6999,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62",
            "Bags",
            "Water-resistant backpack with laptop compartment.",
        ),
        product(
            9,
            "Smart Watch",
            24999,
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a",
            "Electronics",
            "Feature-rich smartwatch with health monitoring.",
        ),
        product(
            10,
            "Designer Belt",
            8999,
            "https://images.unsplash.com/photo-1553704571-c32e6602d943",
            "Accessories",
            "Premium leather belt with designer buckle.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_products() {
        assert_eq!(Catalog::default().products().len(), 10);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::default();
        let found = catalog.get(ProductId::new(2)).expect("product 2");
        assert_eq!(found.name, "Running Shoes");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = Catalog::default();
        let found = catalog.find_by_name("premium watch").expect("match");
        assert_eq!(found.id, ProductId::new(1));
    }

    #[test]
    fn test_find_by_name_substring() {
        let catalog = Catalog::default();
        let found = catalog.find_by_name("wallet").expect("match");
        assert_eq!(found.name, "Leather Wallet");
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        // "watch" matches both Premium Watch (1) and Smart Watch (9);
        // catalog order decides.
        let catalog = Catalog::default();
        let found = catalog.find_by_name("watch").expect("match");
        assert_eq!(found.id, ProductId::new(1));
    }

    #[test]
    fn test_find_by_name_not_found() {
        assert!(Catalog::default().find_by_name("unicorn saddle").is_none());
    }
}
