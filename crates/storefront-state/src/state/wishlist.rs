//! Wishlist State

use crate::domain_models::{ProductId, WishlistItem};

/// Liked products, shared by every session on the device
///
/// Unlike the cart this is not scoped per user: signing in or out leaves it
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    /// Entries in the order they were liked, unique by product id
    pub items: Vec<WishlistItem>,
}

impl WishlistState {
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| item.product_id() == product_id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
