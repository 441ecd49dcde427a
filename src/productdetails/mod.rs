//! Product Details Module
//!
//! Resolves product ids to the name and price the sales flow needs. The
//! catalog itself is owned elsewhere; `ProductCatalog` is its in-process
//! stand-in.

pub mod catalog;
pub mod models;
pub mod provider;

pub use catalog::{Product, ProductCatalog};
pub use models::ProductDetails;
pub use provider::{CatalogProductDetailsProvider, ProductDetailsProvider};
