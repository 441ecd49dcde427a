//! Product details lookup.

use super::{catalog::ProductCatalog, models::ProductDetails};
use crate::error::StorageError;
use std::sync::Arc;

/// Resolves a product id to its details.
pub trait ProductDetailsProvider: Send + Sync {
    /// Returns `Ok(None)` when the product does not exist.
    fn load(&self, product_id: &str) -> Result<Option<ProductDetails>, StorageError>;
}

/// Provider backed by the product catalog.
pub struct CatalogProductDetailsProvider {
    catalog: Arc<ProductCatalog>,
}

impl CatalogProductDetailsProvider {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }
}

impl ProductDetailsProvider for CatalogProductDetailsProvider {
    fn load(&self, product_id: &str) -> Result<Option<ProductDetails>, StorageError> {
        Ok(self
            .catalog
            .load_by_id(product_id)
            .map(|product| ProductDetails::new(product.id, product.name, product.price)))
    }
}
