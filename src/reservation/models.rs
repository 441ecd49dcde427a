//! Reservation Domain Models

use crate::{offering::Offer, payment::PaymentData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Customer's acceptance of the current offer.
///
/// The sales flow only reads the contact fields; everything else is carried
/// into the reservation untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferAcceptanceRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub payment_method: Option<String>,
    pub shipping_address: Option<String>,

    /// Captures any extra fields dynamically
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// An accepted offer with its payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: Uuid,
    customer_id: String,
    request: OfferAcceptanceRequest,
    offer: Offer,
    payment_reference: String,
    payment_url: String,
    created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn of(
        id: Uuid,
        customer_id: impl Into<String>,
        request: OfferAcceptanceRequest,
        offer: Offer,
        payment: PaymentData,
    ) -> Self {
        Self {
            id,
            customer_id: customer_id.into(),
            request,
            offer,
            payment_reference: payment.reference,
            payment_url: payment.url,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn request(&self) -> &OfferAcceptanceRequest {
        &self.request
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    pub fn payment_reference(&self) -> &str {
        &self.payment_reference
    }

    pub fn payment_url(&self) -> &str {
        &self.payment_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn details(&self) -> ReservationDetails {
        ReservationDetails {
            reservation_id: self.id,
            payment_url: self.payment_url.clone(),
        }
    }
}

/// Response for an accepted offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub reservation_id: Uuid,
    pub payment_url: String,
}
