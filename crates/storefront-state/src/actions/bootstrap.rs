//! Bootstrap actions

use crate::domain_models::{CartItem, PaymentMethod, ShippingAddress, UserSession, WishlistItem};

/// Everything read back from storage on start-up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub session: Option<UserSession>,
    /// Cart of the scope derived from `session`
    pub cart_items: Vec<CartItem>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<PaymentMethod>,
    pub wishlist: Vec<WishlistItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapAction {
    /// Store created, read persisted state
    Start,
    /// Persisted state loaded
    Hydrated(Box<PersistedState>),
}
