//! Payment models.

use crate::{offering::Offer, reservation::OfferAcceptanceRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the gateway needs to open a payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPaymentRequest {
    /// Reservation the payment settles
    pub reservation_id: Uuid,
    pub amount: Decimal,
    pub description: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterPaymentRequest {
    pub fn of(reservation_id: Uuid, request: &OfferAcceptanceRequest, offer: &Offer) -> Self {
        Self {
            reservation_id,
            amount: offer.total,
            description: format!("Reservation {} ({} items)", reservation_id, offer.line_items.len()),
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
        }
    }
}

/// A payment registered with the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    /// Gateway-side payment reference
    pub reference: String,

    /// Where the customer is sent to pay
    pub url: String,
}
