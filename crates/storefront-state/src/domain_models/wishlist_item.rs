//! Wishlist entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// A liked product and when it was liked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn new(product: Product, added_at: DateTime<Utc>) -> Self {
        Self { product, added_at }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}
