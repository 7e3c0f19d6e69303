//! Application configuration
//!
//! Configuration loaded from .storefront.toml file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from .storefront.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// File the client state (cart, wishlist, session) is persisted to
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Checkout pricing rules
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Pricing rules applied when summarising a cart for checkout
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricingConfig {
    /// Tax rate applied to the items price (0.15 = 15%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Orders with an items price strictly above this ship for free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Decimal,

    /// Flat shipping fee for orders at or below the threshold
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: Decimal,
}

fn default_storage_path() -> PathBuf {
    crate::paths::default_storage_path()
}

fn default_tax_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn default_free_shipping_threshold() -> Decimal {
    Decimal::from(100)
}

fn default_shipping_fee() -> Decimal {
    Decimal::from(10)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            free_shipping_threshold: default_free_shipping_threshold(),
            shipping_fee: default_shipping_fee(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            pricing: PricingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_pricing() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.tax_rate, Decimal::new(15, 2));
        assert_eq!(pricing.free_shipping_threshold, Decimal::from(100));
        assert_eq!(pricing.shipping_fee, Decimal::from(10));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            storage_path = "/tmp/shop/state.json"

            [pricing]
            tax_rate = "0.2"
            shipping_fee = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/shop/state.json"));
        assert_eq!(config.pricing.tax_rate, Decimal::new(2, 1));
        assert_eq!(config.pricing.shipping_fee, Decimal::from(5));
        // threshold should use default
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::from(100));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.pricing, PricingConfig::default());
        assert!(!config.storage_path.as_os_str().is_empty());
    }
}
