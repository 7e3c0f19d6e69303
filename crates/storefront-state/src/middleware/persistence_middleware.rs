//! Persistence Middleware
//!
//! Mirrors the state tree to a [`KeyValueStorage`].
//!
//! # Storage layout
//!
//! - `session` - signed-in user
//! - `cart:<userId>` / `cart:guest` - cart lines per scope
//! - `shippingAddress`, `paymentMethod` - cleared on every login and logout
//! - `wishlist` - one list for the whole device
//!
//! An empty cart or wishlist is stored as a missing key.
//!
//! # Flow
//!
//! - `Bootstrap::Start` reads everything and dispatches `Bootstrap::Hydrated`
//! - `Session::Login` loads the new scope's lines and dispatches `Cart::Restored`
//! - cart and wishlist mutations dispatch a `Storage` follow-up, which runs
//!   after the mutation has been reduced and writes the resulting collection

use storefront_config::{load_json, save_json, KeyValueStorage};

use crate::actions::{
    Action, BootstrapAction, CartAction, PersistedState, SessionAction, StorageAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{
    CartItem, CartScope, PaymentMethod, ShippingAddress, UserSession, WishlistItem,
};
use crate::middleware::Middleware;
use crate::state::AppState;

pub const SESSION_KEY: &str = "session";
pub const SHIPPING_ADDRESS_KEY: &str = "shippingAddress";
pub const PAYMENT_METHOD_KEY: &str = "paymentMethod";
pub const WISHLIST_KEY: &str = "wishlist";

/// Middleware for client state persistence
pub struct PersistenceMiddleware<S> {
    storage: S,
}

impl<S: KeyValueStorage> PersistenceMiddleware<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load_cart(&self, scope: &CartScope) -> Vec<CartItem> {
        load_json(&self.storage, &scope.storage_key()).unwrap_or_default()
    }

    fn hydrate(&self) -> PersistedState {
        let session: Option<UserSession> = load_json(&self.storage, SESSION_KEY);
        let scope = CartScope::for_session(session.as_ref());
        let cart_items = self.load_cart(&scope);
        let shipping_address: Option<ShippingAddress> =
            load_json(&self.storage, SHIPPING_ADDRESS_KEY);
        let payment_method: Option<PaymentMethod> = load_json(&self.storage, PAYMENT_METHOD_KEY);
        let wishlist: Vec<WishlistItem> =
            load_json(&self.storage, WISHLIST_KEY).unwrap_or_default();

        log::info!(
            "PersistenceMiddleware: hydrated {} cart lines ({}) and {} wishlist items",
            cart_items.len(),
            scope,
            wishlist.len()
        );

        PersistedState {
            session,
            cart_items,
            shipping_address,
            payment_method,
            wishlist,
        }
    }

    /// Write a collection, or delete the key when it is empty
    fn write_collection<T: serde::Serialize>(&self, key: &str, items: &[T]) {
        let result = if items.is_empty() {
            self.storage.remove(key)
        } else {
            save_json(&self.storage, key, items)
        };

        match result {
            Ok(()) => log::debug!(
                "PersistenceMiddleware: wrote {} items to '{}'",
                items.len(),
                key
            ),
            Err(e) => log::error!("Failed to persist '{}': {:#}", key, e),
        }
    }

    fn write_value<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = save_json(&self.storage, key, value) {
            log::error!("Failed to persist '{}': {:#}", key, e);
        }
    }

    fn remove_keys(&self, keys: &[&str]) {
        for key in keys {
            if let Err(e) = self.storage.remove(key) {
                log::error!("Failed to remove '{}': {:#}", key, e);
            }
        }
    }
}

impl<S: KeyValueStorage> Middleware for PersistenceMiddleware<S> {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                let persisted = self.hydrate();
                let hydrated = BootstrapAction::Hydrated(Box::new(persisted));
                dispatcher.dispatch(Action::Bootstrap(hydrated));
                true
            }

            Action::Session(SessionAction::Login(session)) => {
                self.remove_keys(&[SHIPPING_ADDRESS_KEY, PAYMENT_METHOD_KEY]);
                self.write_value(SESSION_KEY, session);

                let scope = CartScope::for_session(Some(session));
                let items = self.load_cart(&scope);
                log::info!(
                    "PersistenceMiddleware: restoring {} cart lines for {}",
                    items.len(),
                    scope
                );
                dispatcher.dispatch(Action::Cart(CartAction::Restored(items)));
                true
            }

            // The signed-out user's cart stays in storage for their next login
            Action::Session(SessionAction::Logout) => {
                self.remove_keys(&[SESSION_KEY, SHIPPING_ADDRESS_KEY, PAYMENT_METHOD_KEY]);
                true
            }

            Action::Cart(
                CartAction::AddItem(_) | CartAction::RemoveItem(_) | CartAction::Clear,
            ) => {
                dispatcher.dispatch(Action::Storage(StorageAction::SyncCart));
                true
            }

            Action::Cart(CartAction::SaveShippingAddress(address)) => {
                self.write_value(SHIPPING_ADDRESS_KEY, address);
                true
            }

            Action::Cart(CartAction::SavePaymentMethod(method)) => {
                self.write_value(PAYMENT_METHOD_KEY, method);
                true
            }

            Action::Wishlist(_) => {
                dispatcher.dispatch(Action::Storage(StorageAction::SyncWishlist));
                true
            }

            Action::Storage(StorageAction::SyncCart) => {
                let scope = state.cart_scope();
                self.write_collection(&scope.storage_key(), &state.cart.items);
                false // Consume action
            }

            Action::Storage(StorageAction::SyncWishlist) => {
                self.write_collection(WISHLIST_KEY, &state.wishlist.items);
                false // Consume action
            }

            _ => true,
        }
    }
}
