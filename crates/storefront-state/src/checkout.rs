//! Checkout
//!
//! The checkout wizard walks sign-in → shipping → payment → place order.
//! Placing the order itself is the order API's job; this module only decides
//! which step is next and assembles the order draft from the cart.

use serde::Serialize;
use storefront_config::PricingConfig;
use strum::Display;

use crate::domain_models::{CartItem, PaymentMethod, PriceSummary, ShippingAddress, UserId};
use crate::error::CheckoutError;
use crate::state::AppState;

/// Steps of the checkout wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum CheckoutStep {
    #[strum(to_string = "Sign In")]
    SignIn,
    #[strum(to_string = "Shipping")]
    Shipping,
    #[strum(to_string = "Payment")]
    Payment,
    #[strum(to_string = "Place Order")]
    PlaceOrder,
}

impl CheckoutStep {
    /// First step whose requirement is not met yet
    pub fn next(state: &AppState) -> Self {
        if !state.is_signed_in() {
            return CheckoutStep::SignIn;
        }
        let has_address = state
            .cart
            .shipping_address
            .as_ref()
            .is_some_and(ShippingAddress::is_complete);
        if !has_address {
            return CheckoutStep::Shipping;
        }
        if state.cart.payment_method.is_none() {
            return CheckoutStep::Payment;
        }
        CheckoutStep::PlaceOrder
    }
}

/// Everything the order API needs to create an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub summary: PriceSummary,
}

/// Assemble an order from the current cart
pub fn prepare_order(
    state: &AppState,
    pricing: &PricingConfig,
) -> Result<OrderDraft, CheckoutError> {
    let session = state.session.as_ref().ok_or(CheckoutError::NotSignedIn)?;

    if state.cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let shipping_address = state
        .cart
        .shipping_address
        .clone()
        .filter(ShippingAddress::is_complete)
        .ok_or(CheckoutError::MissingShippingAddress)?;

    let payment_method = state
        .cart
        .payment_method
        .ok_or(CheckoutError::MissingPaymentMethod)?;

    Ok(OrderDraft {
        user_id: session.user_id.clone(),
        items: state.cart.items.clone(),
        shipping_address,
        payment_method,
        summary: PriceSummary::compute(&state.cart.items, pricing),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Product, UserSession};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn ready_state() -> AppState {
        let mut state = AppState {
            session: Some(UserSession::new("u1", "Jane", "jane@example.com")),
            ..Default::default()
        };
        state.cart.items.push(CartItem::from_product(
            &Product::new("p1", "Keyboard", Decimal::from(40)).with_stock(3),
            2,
        ));
        state.cart.shipping_address = Some(ShippingAddress::new(
            "Jane Doe", "1 Main St", "Springfield", "12345", "US",
        ));
        state.cart.payment_method = Some(PaymentMethod::PayPal);
        state
    }

    #[test]
    fn test_steps_progress_in_order() {
        let mut state = AppState::default();
        assert_eq!(CheckoutStep::next(&state), CheckoutStep::SignIn);

        state.session = Some(UserSession::new("u1", "Jane", "jane@example.com"));
        assert_eq!(CheckoutStep::next(&state), CheckoutStep::Shipping);

        // Incomplete address doesn't count
        state.cart.shipping_address = Some(ShippingAddress::new("Jane", "", "", "", ""));
        assert_eq!(CheckoutStep::next(&state), CheckoutStep::Shipping);

        assert_eq!(CheckoutStep::next(&ready_state()), CheckoutStep::PlaceOrder);
        assert_eq!(CheckoutStep::PlaceOrder.to_string(), "Place Order");
    }

    #[test]
    fn test_prepare_order() {
        let draft = prepare_order(&ready_state(), &PricingConfig::default()).unwrap();
        assert_eq!(draft.user_id, UserId::new("u1"));
        assert_eq!(draft.payment_method, PaymentMethod::PayPal);
        assert_eq!(draft.summary.items_price, Decimal::from(80));
        assert_eq!(draft.summary.shipping_price, Decimal::from(10));
        assert_eq!(draft.summary.tax_price, Decimal::from(12));
        assert_eq!(draft.summary.total_price, Decimal::from(102));
    }

    #[test]
    fn test_prepare_order_errors() {
        let pricing = PricingConfig::default();

        let mut state = ready_state();
        state.session = None;
        assert_eq!(prepare_order(&state, &pricing), Err(CheckoutError::NotSignedIn));

        let mut state = ready_state();
        state.cart.items.clear();
        assert_eq!(prepare_order(&state, &pricing), Err(CheckoutError::EmptyCart));

        let mut state = ready_state();
        state.cart.shipping_address = Some(ShippingAddress::default());
        assert_eq!(
            prepare_order(&state, &pricing),
            Err(CheckoutError::MissingShippingAddress)
        );

        let mut state = ready_state();
        state.cart.payment_method = None;
        assert_eq!(
            prepare_order(&state, &pricing),
            Err(CheckoutError::MissingPaymentMethod)
        );
    }
}
