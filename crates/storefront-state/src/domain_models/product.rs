//! Product model
//!
//! Snapshot of a catalog product as handed over by the catalog collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog product snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Units in stock when the snapshot was taken
    #[serde(default)]
    pub count_in_stock: u32,
}

impl Product {
    /// Create a product with empty display fields and nothing in stock
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: String::new(),
            brand: String::new(),
            category: String::new(),
            count_in_stock: 0,
        }
    }

    pub fn with_stock(mut self, count_in_stock: u32) -> Self {
        self.count_in_stock = count_in_stock;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }
}
