//! Client-side state for the storefront
//!
//! A Redux-style store holding the cart, the wishlist and the user session:
//!
//! - actions describe every change
//! - middleware performs side effects (persistence, logging)
//! - pure reducers compute the next state
//!
//! [`Storefront`] wires a store to a [`storefront_config::KeyValueStorage`] and
//! exposes the cart and wishlist operations.

pub mod actions;
pub mod checkout;
pub mod dispatcher;
pub mod domain_models;
pub mod error;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod storefront;

pub use checkout::{CheckoutStep, OrderDraft};
pub use error::{CartError, CheckoutError};
pub use state::{AppState, CartState, WishlistState};
pub use store::Store;
pub use storefront::{CartStore, Storefront, WishlistStore};
