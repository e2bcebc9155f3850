//! Static product catalog.
//!
//! The catalog is fixed at process start: either the built-in demo products
//! or the `[[products]]` list from the config file. Nothing mutates it
//! afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Price in minor currency units (e.g. paise, cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Render as `<symbol><major>.<minor>`, e.g. `₹24.99`.
    pub fn display_with(self, symbol: &str) -> String {
        format!("{}{}.{:02}", symbol, self.0 / 100, self.0 % 100)
    }
}

/// A catalog item. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: u64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price: Price::from_minor(price),
        }
    }
}

/// Ordered, immutable sequence of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The demo catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new("1", "T-Shirt", 499),
                Product::new("2", "Sneakers", 2499),
                Product::new("3", "Backpack", 1299),
                Product::new("4", "Watch", 3999),
            ],
        }
    }

    /// Build a catalog from an already validated product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order_is_stable() {
        let catalog = Catalog::builtin();
        let titles: Vec<&str> = catalog
            .list_products()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["T-Shirt", "Sneakers", "Backpack", "Watch"]);
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<&ProductId> = catalog.list_products().iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn price_formats_minor_units() {
        assert_eq!(Price::from_minor(499).display_with("₹"), "₹4.99");
        assert_eq!(Price::from_minor(2500).display_with("$"), "$25.00");
        assert_eq!(Price::from_minor(7).display_with(""), "0.07");
    }
}
