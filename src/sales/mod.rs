//! Sales Module
//!
//! Ties carts, offers, payments and reservations together:
//! - The `Sales` orchestrator
//! - Customer session resolution
//! - Application state shared with the HTTP layer
//! - REST API handlers

pub mod handlers;
pub mod service;
pub mod session;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use service::Sales;
pub use state::{AppState, SharedState};
