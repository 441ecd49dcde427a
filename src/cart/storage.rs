//! Cart persistence.

use super::models::Cart;
use crate::error::StorageError;
use dashmap::DashMap;

/// Stores one cart per customer.
pub trait CartStorage: Send + Sync {
    /// Loads the customer's cart, `None` when the customer has none yet.
    fn load(&self, customer_id: &str) -> Result<Option<Cart>, StorageError>;

    /// Saves the cart, replacing whatever was stored for the customer.
    fn add_for_customer(&self, customer_id: &str, cart: Cart) -> Result<(), StorageError>;
}

/// In-memory cart storage keyed by customer id.
#[derive(Debug, Default)]
pub struct InMemoryCartStorage {
    /// DashMap allows concurrent access without external Mutexes.
    carts: DashMap<String, Cart>,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for InMemoryCartStorage {
    fn load(&self, customer_id: &str) -> Result<Option<Cart>, StorageError> {
        Ok(self.carts.get(customer_id).map(|cart| cart.clone()))
    }

    fn add_for_customer(&self, customer_id: &str, cart: Cart) -> Result<(), StorageError> {
        self.carts.insert(customer_id.to_string(), cart);
        Ok(())
    }
}
