//! Product details as seen by the sales flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name and unit price of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl ProductDetails {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
