//! Error types
//!
//! The stores themselves never fail; these errors come from the guards
//! callers run before dispatching (quantity checks) and from assembling
//! an order at the end of checkout.

use thiserror::Error;

use crate::domain_models::ProductId;

/// Rejected cart quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("quantity for {product_id} must be at least 1")]
    ZeroQuantity { product_id: ProductId },

    #[error("only {available} of {product_id} in stock, {requested} requested")]
    ExceedsStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
}

/// Why an order can't be placed yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("sign in to place an order")]
    NotSignedIn,

    #[error("the cart is empty")]
    EmptyCart,

    #[error("a complete shipping address is required")]
    MissingShippingAddress,

    #[error("no payment method selected")]
    MissingPaymentMethod,
}
