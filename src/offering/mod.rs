//! Offer Calculation Module
//!
//! Turns a cart into a priced offer:
//! - Offer models (lines, applied discounts, total)
//! - Discount policies
//! - The calculator combining both

pub mod calculator;
pub mod models;
pub mod policy;

pub use calculator::OfferCalculator;
pub use models::{checked_sum, AppliedDiscount, Offer, OfferLine};
pub use policy::{DiscountPolicy, EveryNItemLineDiscountPolicy, TotalDiscountPolicy};
