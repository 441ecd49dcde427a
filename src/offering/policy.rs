//! Discount policies.
//!
//! A policy looks at the ordered list of line prices and says how much to
//! take off. Policies never see each other's results.

use super::models::checked_sum;
use crate::error::SalesError;
use rust_decimal::Decimal;

/// Computes a discount amount from ordered line prices.
pub trait DiscountPolicy: Send + Sync {
    /// Label shown next to the discount in the offer.
    fn name(&self) -> String;

    /// Fails with [`SalesError::PriceOverflow`] when the prices cannot be added up.
    fn calculate(&self, prices: &[Decimal]) -> Result<Decimal, SalesError>;
}

/// Flat amount off once the gross total reaches a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalDiscountPolicy {
    threshold: Decimal,
    amount: Decimal,
}

impl TotalDiscountPolicy {
    pub fn new(threshold: Decimal, amount: Decimal) -> Self {
        Self { threshold, amount }
    }
}

impl DiscountPolicy for TotalDiscountPolicy {
    fn name(&self) -> String {
        format!("{} off orders of {} or more", self.amount, self.threshold)
    }

    fn calculate(&self, prices: &[Decimal]) -> Result<Decimal, SalesError> {
        let total = checked_sum(prices)?;
        if total >= self.threshold {
            Ok(self.amount)
        } else {
            Ok(Decimal::ZERO)
        }
    }
}

/// Every Nth line (N, 2N, 3N, ... counting from 1) is free.
#[derive(Debug, Clone, PartialEq)]
pub struct EveryNItemLineDiscountPolicy {
    n: usize,
}

impl EveryNItemLineDiscountPolicy {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl DiscountPolicy for EveryNItemLineDiscountPolicy {
    fn name(&self) -> String {
        format!("One free item in every {}", self.n)
    }

    fn calculate(&self, prices: &[Decimal]) -> Result<Decimal, SalesError> {
        if self.n == 0 {
            return Ok(Decimal::ZERO);
        }

        checked_sum(prices.iter().skip(self.n - 1).step_by(self.n))
    }
}
