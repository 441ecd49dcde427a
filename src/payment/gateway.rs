//! Payment gateway contract and the in-process gateway.

use super::models::{PaymentData, RegisterPaymentRequest};
use crate::error::PaymentError;
use dashmap::DashMap;
use uuid::Uuid;

/// Registers payments with an external provider.
pub trait PaymentGateway: Send + Sync {
    fn register(&self, request: &RegisterPaymentRequest) -> Result<PaymentData, PaymentError>;
}

/// Gateway that registers payments locally.
///
/// Mints a reference per payment and points the customer at
/// `{base_url}/{reference}`. Every registration is kept for the lifetime of
/// the gateway so it can be inspected; nothing is ever evicted, so this is
/// meant for demos and tests, not long-running production traffic.
#[derive(Debug)]
pub struct DummyPaymentGateway {
    base_url: String,
    registered: DashMap<String, RegisterPaymentRequest>,
}

impl DummyPaymentGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            registered: DashMap::new(),
        }
    }

    /// The request registered under `reference`, if any.
    pub fn registered(&self, reference: &str) -> Option<RegisterPaymentRequest> {
        self.registered.get(reference).map(|r| r.clone())
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }
}

impl PaymentGateway for DummyPaymentGateway {
    fn register(&self, request: &RegisterPaymentRequest) -> Result<PaymentData, PaymentError> {
        if request.amount.is_sign_negative() {
            return Err(PaymentError::Rejected(format!(
                "negative amount {}",
                request.amount
            )));
        }

        let reference = Uuid::new_v4().simple().to_string();
        let url = format!("{}/{}", self.base_url, reference);

        tracing::debug!(
            reference = %reference,
            reservation_id = %request.reservation_id,
            amount = %request.amount,
            "Payment registered"
        );
        self.registered.insert(reference.clone(), request.clone());

        Ok(PaymentData { reference, url })
    }
}
