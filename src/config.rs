//! Service configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use rust_decimal::Decimal;
use std::{env, path::PathBuf, str::FromStr};

/// Parameters of the discount policies applied to every offer.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountConfig {
    /// Gross total at which the flat discount kicks in
    pub total_threshold: Decimal,

    /// Flat amount taken off once the threshold is reached
    pub total_discount_amount: Decimal,

    /// Every Nth cart line is free
    pub every_n_item_count: usize,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            total_threshold: Decimal::from(500),
            total_discount_amount: Decimal::from(50),
            every_n_item_count: 5,
        }
    }
}

/// Sales service configuration.
#[derive(Debug, Clone)]
pub struct SalesConfig {
    /// HTTP port
    pub port: u16,

    /// Base URL the payment gateway builds redirect links from
    pub payment_base_url: String,

    /// Discount policy parameters
    pub discounts: DiscountConfig,

    /// Optional JSON file with the product catalog
    pub catalog_path: Option<PathBuf>,
}

impl SalesConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = DiscountConfig::default();

        let every_n_item_count: usize = parse_var("DISCOUNT_EVERY_N_ITEM", defaults.every_n_item_count)?;
        if every_n_item_count == 0 {
            return Err(ConfigError::InvalidValue("DISCOUNT_EVERY_N_ITEM".to_string()));
        }

        Ok(SalesConfig {
            port: parse_var("SALES_PORT", 8000)?,

            payment_base_url: env::var("PAYMENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/payments".to_string()),

            discounts: DiscountConfig {
                total_threshold: parse_var("DISCOUNT_TOTAL_THRESHOLD", defaults.total_threshold)?,
                total_discount_amount: parse_var(
                    "DISCOUNT_TOTAL_AMOUNT",
                    defaults.total_discount_amount,
                )?,
                every_n_item_count,
            },

            catalog_path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
        })
    }
}

/// Reads `name` from the environment, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load product catalog: {0}")]
    Catalog(String),
}
