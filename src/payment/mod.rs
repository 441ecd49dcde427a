//! Payment Module
//!
//! The payment gateway is an external service; this module holds the
//! contract the sales flow needs from it and an in-process gateway.

pub mod gateway;
pub mod models;

pub use gateway::{DummyPaymentGateway, PaymentGateway};
pub use models::{PaymentData, RegisterPaymentRequest};
