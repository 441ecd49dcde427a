//! In-memory product catalog.

use crate::config::ConfigError;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,

    /// Unit price; must not be negative
    pub price: Decimal,
}

/// Product catalog keyed by product id.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: DashMap<String, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of products. Later duplicates win.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.add(product);
        }
        catalog
    }

    /// Loads a catalog from a JSON file holding an array of products.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Catalog(format!("{}: {}", path.display(), e)))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Catalog(format!("{}: {}", path.display(), e)))?;

        if let Some(product) = products.iter().find(|p| p.price.is_sign_negative()) {
            return Err(ConfigError::Catalog(format!(
                "product {} has a negative price",
                product.id
            )));
        }

        Ok(Self::from_products(products))
    }

    /// A small catalog for local runs when no catalog file is configured.
    pub fn with_demo_products() -> Self {
        Self::from_products([
            Product {
                id: "lego-set-1".into(),
                name: "Lego Set 1".into(),
                price: Decimal::from(120),
            },
            Product {
                id: "lego-set-2".into(),
                name: "Lego Set 2".into(),
                price: Decimal::new(24999, 2),
            },
            Product {
                id: "puzzle-1000".into(),
                name: "Puzzle 1000 pcs".into(),
                price: Decimal::new(4990, 2),
            },
        ])
    }

    /// Inserts or replaces a product.
    pub fn add(&self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn load_by_id(&self, product_id: &str) -> Option<Product> {
        self.products.get(product_id).map(|p| p.clone())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
