//! Sales Application State

use super::service::Sales;
use crate::{
    cart::InMemoryCartStorage,
    config::SalesConfig,
    offering::OfferCalculator,
    payment::DummyPaymentGateway,
    productdetails::{CatalogProductDetailsProvider, ProductCatalog, ProductDetailsProvider},
    reservation::InMemoryReservationStorage,
};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state handed to every handler
pub struct AppState {
    pub sales: Sales,
}

impl AppState {
    pub fn new(sales: Sales) -> Self {
        Self { sales }
    }

    /// Wires the sales flow with in-memory storage and the local payment gateway.
    pub fn in_memory(config: &SalesConfig, catalog: Arc<ProductCatalog>) -> Self {
        let product_details: Arc<dyn ProductDetailsProvider> =
            Arc::new(CatalogProductDetailsProvider::new(catalog));

        let sales = Sales::new(
            Arc::new(InMemoryCartStorage::new()),
            product_details.clone(),
            OfferCalculator::new(product_details, &config.discounts),
            Arc::new(DummyPaymentGateway::new(config.payment_base_url.clone())),
            Arc::new(InMemoryReservationStorage::new()),
        );

        Self::new(sales)
    }
}
