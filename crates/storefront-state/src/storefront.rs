//! Storefront facade
//!
//! Owns a [`Store`] wired with logging and persistence middleware, and hands
//! out the two stores the UI talks to:
//!
//! ```rust,ignore
//! let mut shop = Storefront::new(MemoryStorage::new());
//! shop.cart_store().add_item(&product, 2);
//! shop.wishlist_store().toggle(&product);
//! assert_eq!(shop.cart().item_count(), 2);
//! ```

use chrono::Utc;
use storefront_config::{KeyValueStorage, PricingConfig};

use crate::actions::{Action, BootstrapAction, CartAction, SessionAction, WishlistAction};
use crate::checkout::{prepare_order, CheckoutStep, OrderDraft};
use crate::domain_models::{
    CartItem, PaymentMethod, PriceSummary, Product, ProductId, ShippingAddress, UserSession,
    WishlistItem,
};
use crate::error::CheckoutError;
use crate::middleware::{LoggingMiddleware, PersistenceMiddleware};
use crate::state::{AppState, CartState, WishlistState};
use crate::store::Store;

/// Client state of one storefront, persisted to `storage`
pub struct Storefront {
    store: Store,
}

impl Storefront {
    /// Create the store and hydrate it from `storage`
    pub fn new<S: KeyValueStorage + 'static>(storage: S) -> Self {
        let mut store = Store::new(AppState::default());

        // Add middleware in order (they execute in this order)
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(PersistenceMiddleware::new(storage)));

        store.dispatch(Action::Bootstrap(BootstrapAction::Start));

        Self { store }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.state().session.as_ref()
    }

    /// Cart read model: lines, shipping address, payment method
    pub fn cart(&self) -> &CartState {
        &self.state().cart
    }

    /// Wishlist read model: liked items and their count
    pub fn wishlist(&self) -> &WishlistState {
        &self.state().wishlist
    }

    pub fn cart_store(&mut self) -> CartStore<'_> {
        CartStore {
            store: &mut self.store,
        }
    }

    pub fn wishlist_store(&mut self) -> WishlistStore<'_> {
        WishlistStore {
            store: &mut self.store,
        }
    }

    /// Next step of the checkout wizard
    pub fn checkout_step(&self) -> CheckoutStep {
        CheckoutStep::next(self.state())
    }

    pub fn price_summary(&self, pricing: &PricingConfig) -> PriceSummary {
        PriceSummary::compute(&self.cart().items, pricing)
    }

    /// Complete checkout: assemble the order and empty the cart
    ///
    /// The returned draft is meant for the order API. Shipping address and
    /// payment method are kept.
    pub fn place_order(&mut self, pricing: &PricingConfig) -> Result<OrderDraft, CheckoutError> {
        let draft = prepare_order(self.state(), pricing)?;
        log::info!(
            "Order placed by {} with {} lines, total {}",
            draft.user_id,
            draft.items.len(),
            draft.summary.total_price
        );
        self.store.dispatch(Action::Cart(CartAction::Clear));
        Ok(draft)
    }
}

/// Cart operations, including the session transitions that re-scope the cart
pub struct CartStore<'a> {
    store: &'a mut Store,
}

impl CartStore<'_> {
    pub fn state(&self) -> &CartState {
        &self.store.state().cart
    }

    /// Sign in: switch to the user's persisted cart and reset checkout fields
    pub fn login(&mut self, session: UserSession) {
        self.store
            .dispatch(Action::Session(SessionAction::Login(session)));
    }

    /// Sign out: empty the visible cart, keeping the user's persisted copy
    pub fn logout(&mut self) {
        self.store.dispatch(Action::Session(SessionAction::Logout));
    }

    /// Set the quantity of `product` in the cart to `quantity`
    ///
    /// `quantity` is the resolved target, not an increment. It is not
    /// checked against stock here, see [`crate::domain_models::validate_quantity`].
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let item = CartItem::from_product(product, quantity);
        self.store.dispatch(Action::Cart(CartAction::AddItem(item)));
    }

    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.store
            .dispatch(Action::Cart(CartAction::RemoveItem(product_id.clone())));
    }

    /// Empty the cart lines (shipping address and payment method are kept)
    pub fn clear(&mut self) {
        self.store.dispatch(Action::Cart(CartAction::Clear));
    }

    pub fn save_shipping_address(&mut self, address: ShippingAddress) {
        self.store
            .dispatch(Action::Cart(CartAction::SaveShippingAddress(address)));
    }

    pub fn save_payment_method(&mut self, method: PaymentMethod) {
        self.store
            .dispatch(Action::Cart(CartAction::SavePaymentMethod(method)));
    }
}

/// Wishlist operations
pub struct WishlistStore<'a> {
    store: &'a mut Store,
}

impl WishlistStore<'_> {
    pub fn state(&self) -> &WishlistState {
        &self.store.state().wishlist
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.state().contains(product_id)
    }

    /// Like `product`; no-op when already liked
    pub fn add(&mut self, product: &Product) {
        let item = WishlistItem::new(product.clone(), Utc::now());
        self.store
            .dispatch(Action::Wishlist(WishlistAction::Add(item)));
    }

    pub fn remove(&mut self, product_id: &ProductId) {
        self.store
            .dispatch(Action::Wishlist(WishlistAction::Remove(product_id.clone())));
    }

    /// Like `product` if it isn't liked yet, unlike it otherwise
    pub fn toggle(&mut self, product: &Product) {
        let item = WishlistItem::new(product.clone(), Utc::now());
        self.store
            .dispatch(Action::Wishlist(WishlistAction::Toggle(item)));
    }

    pub fn clear(&mut self) {
        self.store.dispatch(Action::Wishlist(WishlistAction::Clear));
    }
}
