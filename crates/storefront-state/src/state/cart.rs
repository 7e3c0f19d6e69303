//! Cart State

use rust_decimal::Decimal;

use crate::domain_models::{CartItem, PaymentMethod, ProductId, ShippingAddress};

/// Cart of the active scope
///
/// This is also the read model handed to the checkout pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Lines in insertion order, unique by product id
    pub items: Vec<CartItem>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<PaymentMethod>,
}

impl CartState {
    pub fn find(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line prices, unrounded and saturating
    pub fn items_price(&self) -> Decimal {
        CartItem::sum_line_prices(&self.items)
    }
}
