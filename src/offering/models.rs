//! Offer models.

use crate::error::SalesError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferLine {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
}

/// A discount that took something off the offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    /// Human-readable description of the policy
    pub name: String,
    pub amount: Decimal,
}

/// Priced cart with discounts applied.
///
/// Regenerated on every request, never stored on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub line_items: Vec<OfferLine>,
    pub discounts: Vec<AppliedDiscount>,
    pub total: Decimal,
}

impl Offer {
    /// Builds an offer, keeping `total` at zero or above.
    pub fn new(
        line_items: Vec<OfferLine>,
        discounts: Vec<AppliedDiscount>,
    ) -> Result<Self, SalesError> {
        let gross = checked_sum(line_items.iter().map(|line| &line.price))?;
        let discount = checked_sum(discounts.iter().map(|d| &d.amount))?;
        let total = gross
            .checked_sub(discount)
            .ok_or(SalesError::PriceOverflow)?
            .max(Decimal::ZERO);

        Ok(Self {
            line_items,
            discounts,
            total,
        })
    }

    pub fn empty() -> Self {
        Self {
            line_items: Vec::new(),
            discounts: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Sum of line prices before discounts.
    pub fn gross_total(&self) -> Result<Decimal, SalesError> {
        checked_sum(self.line_items.iter().map(|line| &line.price))
    }

    pub fn discount_total(&self) -> Result<Decimal, SalesError> {
        checked_sum(self.discounts.iter().map(|d| &d.amount))
    }
}

/// Adds up amounts, failing with [`SalesError::PriceOverflow`] instead of panicking.
pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Decimal>) -> Result<Decimal, SalesError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
        .ok_or(SalesError::PriceOverflow)
}
