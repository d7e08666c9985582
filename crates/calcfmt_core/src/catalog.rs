//! Product records and the read-only catalog they live in.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Read-only product lookup.
///
/// Handlers hold an `Arc<dyn ProductCatalog>` so tests can swap in their own
/// fixtures. Nothing mutates a catalog after construction.
pub trait ProductCatalog: Send + Sync {
    fn find(&self, id: i64) -> Option<Product>;
}

/// Catalog backed by a fixed in-memory list.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog the server ships with, built once at startup.
    pub fn seeded() -> Self {
        let product = |id, name: &str, category: &str, price| Product {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            price,
        };
        Self::new(vec![
            product(1, "Mechanical keyboard", "peripherals", 349.9),
            product(2, "Wireless mouse", "peripherals", 129.9),
            product(3, "27\" IPS monitor", "displays", 1599.0),
            product(4, "USB-C dock", "accessories", 489.5),
            product(5, "Noise-cancelling headset", "audio", 899.0),
        ])
    }
}

impl ProductCatalog for StaticCatalog {
    fn find(&self, id: i64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_seeded_product_by_id() {
        let catalog = StaticCatalog::seeded();
        let product = catalog.find(3).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category, "displays");
    }

    #[test]
    fn missing_ids_come_back_empty() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.find(999), None);
        assert_eq!(catalog.find(-1), None);
    }

    #[test]
    fn custom_catalogs_serve_their_own_products() {
        let catalog = StaticCatalog::new(vec![Product {
            id: 77,
            name: "Test article".into(),
            category: "fixtures".into(),
            price: 1.0,
        }]);
        assert!(catalog.find(77).is_some());
        assert_eq!(catalog.find(1), None);
    }
}
