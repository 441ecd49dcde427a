//! Shopping Cart Domain Module
//!
//! This module contains the customer cart and its persistence:
//! - Domain model (Cart)
//! - Storage trait and the in-memory implementation

pub mod models;
pub mod storage;

// Re-export commonly used types for convenience
pub use models::Cart;
pub use storage::{CartStorage, InMemoryCartStorage};
