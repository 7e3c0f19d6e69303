//! Cart Reducer
//!
//! Owns the cart lines plus the session-scoped checkout fields
//! (shipping address, payment method).

use crate::actions::{Action, BootstrapAction, CartAction, SessionAction};
use crate::domain_models::CartItem;
use crate::state::CartState;

pub fn reduce(mut state: CartState, action: &Action) -> CartState {
    match action {
        Action::Bootstrap(BootstrapAction::Hydrated(persisted)) => {
            state.items = unique_lines(persisted.cart_items.clone());
            state.shipping_address = persisted.shipping_address.clone();
            state.payment_method = persisted.payment_method;
        }

        // Nothing carries over a session transition. The lines of the new
        // scope arrive afterwards through `CartAction::Restored`.
        Action::Session(SessionAction::Login(_)) | Action::Session(SessionAction::Logout) => {
            state = CartState::default();
        }

        Action::Cart(cart_action) => state = reduce_cart(state, cart_action),

        _ => {}
    }
    state
}

fn reduce_cart(mut state: CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddItem(item) => {
            state.items = upsert(state.items, item.clone());
        }
        CartAction::RemoveItem(product_id) => {
            state.items.retain(|item| &item.product_id != product_id);
        }
        CartAction::Clear => {
            state.items.clear();
        }
        CartAction::SaveShippingAddress(address) => {
            state.shipping_address = Some(address.clone());
        }
        CartAction::SavePaymentMethod(method) => {
            state.payment_method = Some(*method);
        }
        CartAction::Restored(items) => {
            log::debug!("Cart: restored {} lines", items.len());
            state.items = unique_lines(items.clone());
        }
    }
    state
}

/// Replace the quantity of the line for the same product, or append
fn upsert(mut items: Vec<CartItem>, item: CartItem) -> Vec<CartItem> {
    match items
        .iter_mut()
        .find(|existing| existing.product_id == item.product_id)
    {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
    items
}

/// Collapse duplicate lines from storage, the later line wins
fn unique_lines(items: Vec<CartItem>) -> Vec<CartItem> {
    items.into_iter().fold(Vec::new(), upsert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PersistedState;
    use crate::domain_models::{PaymentMethod, Product, ProductId, ShippingAddress, UserSession};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), Decimal::from(10)).with_stock(10)
    }

    fn add(state: CartState, id: &str, quantity: u32) -> CartState {
        reduce(
            state,
            &Action::Cart(CartAction::AddItem(CartItem::from_product(&product(id), quantity))),
        )
    }

    fn quantities(state: &CartState) -> Vec<(&str, u32)> {
        state
            .items
            .iter()
            .map(|item| (item.product_id.as_str(), item.quantity))
            .collect()
    }

    #[test]
    fn test_add_same_product_replaces_quantity() {
        let state = add(CartState::default(), "p1", 1);
        assert_eq!(quantities(&state), vec![("p1", 1)]);

        let state = add(state, "p1", 3);
        assert_eq!(quantities(&state), vec![("p1", 3)]);
    }

    #[test]
    fn test_lines_stay_unique_by_product() {
        let mut state = CartState::default();
        for (id, quantity) in [("p1", 1), ("p2", 2), ("p1", 4), ("p3", 1), ("p2", 1)] {
            state = add(state, id, quantity);
        }
        state = reduce(
            state,
            &Action::Cart(CartAction::RemoveItem(ProductId::new("p3"))),
        );
        state = add(state, "p3", 2);

        assert_eq!(quantities(&state), vec![("p1", 4), ("p2", 1), ("p3", 2)]);
    }

    #[test]
    fn test_remove_missing_item_is_noop() {
        let state = add(CartState::default(), "p1", 1);
        let next = reduce(
            state.clone(),
            &Action::Cart(CartAction::RemoveItem(ProductId::new("nope"))),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_clear_keeps_checkout_fields() {
        let mut state = add(CartState::default(), "p1", 1);
        state = reduce(
            state,
            &Action::Cart(CartAction::SavePaymentMethod(PaymentMethod::PayPal)),
        );
        state = reduce(state, &Action::Cart(CartAction::Clear));

        assert!(state.is_empty());
        assert_eq!(state.payment_method, Some(PaymentMethod::PayPal));
    }

    #[test]
    fn test_session_transitions_reset_everything() {
        let mut state = add(CartState::default(), "p1", 1);
        state = reduce(
            state,
            &Action::Cart(CartAction::SaveShippingAddress(ShippingAddress::new(
                "Jane", "1 Main St", "Springfield", "12345", "US",
            ))),
        );

        let session = UserSession::new("u1", "Jane", "jane@example.com");
        let after_login = reduce(state.clone(), &Action::Session(SessionAction::Login(session)));
        assert_eq!(after_login, CartState::default());

        let after_logout = reduce(state, &Action::Session(crate::actions::SessionAction::Logout));
        assert_eq!(after_logout, CartState::default());
    }

    #[test]
    fn test_restored_lines_are_deduplicated() {
        let items = vec![
            CartItem::from_product(&product("p1"), 1),
            CartItem::from_product(&product("p2"), 1),
            CartItem::from_product(&product("p1"), 5),
        ];
        let state = reduce(CartState::default(), &Action::Cart(CartAction::Restored(items)));
        assert_eq!(quantities(&state), vec![("p1", 5), ("p2", 1)]);
    }

    #[test]
    fn test_hydrated_sets_checkout_fields() {
        let persisted = PersistedState {
            payment_method: Some(PaymentMethod::CashOnDelivery),
            ..Default::default()
        };
        let state = reduce(
            add(CartState::default(), "p1", 1),
            &Action::Bootstrap(BootstrapAction::Hydrated(Box::new(persisted))),
        );
        assert!(state.is_empty());
        assert_eq!(state.payment_method, Some(PaymentMethod::CashOnDelivery));
        assert_eq!(state.shipping_address, None);
    }
}
