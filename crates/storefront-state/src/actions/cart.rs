//! Cart actions

use crate::domain_models::{CartItem, PaymentMethod, ProductId, ShippingAddress};

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a line, or replace the quantity of the existing line for the same product
    AddItem(CartItem),
    /// Remove the line for a product (no-op when absent)
    RemoveItem(ProductId),
    /// Empty the cart lines
    Clear,
    SaveShippingAddress(ShippingAddress),
    SavePaymentMethod(PaymentMethod),
    /// Lines loaded from storage for a newly active scope
    Restored(Vec<CartItem>),
}
