//! Shopping Cart Domain Models

use serde::{Deserialize, Serialize};

/// A customer's cart.
///
/// Holds product ids in the order they were added. A product added twice
/// occupies two lines; repetition is how quantity is expressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Creates a cart with no items.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a product id as a new line.
    pub fn add(&mut self, product_id: impl Into<String>) {
        self.items.push(product_id.into());
    }

    /// Product ids in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
