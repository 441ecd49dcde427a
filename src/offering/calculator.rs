//! Offer calculation.

use super::{
    models::{AppliedDiscount, Offer, OfferLine},
    policy::{DiscountPolicy, EveryNItemLineDiscountPolicy, TotalDiscountPolicy},
};
use crate::{config::DiscountConfig, error::SalesError, productdetails::ProductDetailsProvider};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Prices cart items and applies the configured discount policies.
pub struct OfferCalculator {
    product_details: Arc<dyn ProductDetailsProvider>,
    policies: Vec<Box<dyn DiscountPolicy>>,
}

impl OfferCalculator {
    pub fn new(product_details: Arc<dyn ProductDetailsProvider>, discounts: &DiscountConfig) -> Self {
        Self {
            product_details,
            policies: vec![
                Box::new(TotalDiscountPolicy::new(
                    discounts.total_threshold,
                    discounts.total_discount_amount,
                )),
                Box::new(EveryNItemLineDiscountPolicy::new(discounts.every_n_item_count)),
            ],
        }
    }

    /// Computes the offer for `items` with the configured policies.
    pub fn calculate_offer(&self, items: &[String]) -> Result<Offer, SalesError> {
        self.calculate_offer_with(items, &self.policies)
    }

    /// Computes the offer for `items` with an explicit policy set.
    pub fn calculate_offer_with(
        &self,
        items: &[String],
        policies: &[Box<dyn DiscountPolicy>],
    ) -> Result<Offer, SalesError> {
        let lines = self.resolve_lines(items)?;
        apply_policies(lines, policies)
    }

    fn resolve_lines(&self, items: &[String]) -> Result<Vec<OfferLine>, SalesError> {
        items
            .iter()
            .map(|product_id| -> Result<OfferLine, SalesError> {
                let details = self
                    .product_details
                    .load(product_id)?
                    .ok_or_else(|| SalesError::NoSuchProduct(product_id.clone()))?;

                Ok(OfferLine {
                    product_id: details.id,
                    name: details.name,
                    price: details.price,
                })
            })
            .collect()
    }
}

/// Runs every policy against the full price list and sums the results.
///
/// Policies are independent: none sees the discount another one granted.
pub fn apply_policies(
    lines: Vec<OfferLine>,
    policies: &[Box<dyn DiscountPolicy>],
) -> Result<Offer, SalesError> {
    let prices: Vec<Decimal> = lines.iter().map(|line| line.price).collect();

    let mut discounts = Vec::with_capacity(policies.len());
    for policy in policies {
        let amount = policy.calculate(&prices)?;
        if amount > Decimal::ZERO {
            discounts.push(AppliedDiscount {
                name: policy.name(),
                amount,
            });
        }
    }

    Offer::new(lines, discounts)
}
