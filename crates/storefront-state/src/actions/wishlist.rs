//! Wishlist actions
//!
//! Timestamps are resolved by the caller so reducers stay pure.

use crate::domain_models::{ProductId, WishlistItem};

#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Append unless the product is already liked
    Add(WishlistItem),
    /// Remove the entry for a product (no-op when absent)
    Remove(ProductId),
    /// Add if absent, remove if present
    Toggle(WishlistItem),
    Clear,
}
