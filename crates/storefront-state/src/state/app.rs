//! Application State

use crate::domain_models::{CartScope, UserSession};

use super::{CartState, WishlistState};

/// Root state of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Persisted state has been loaded
    pub hydrated: bool,
    /// Signed-in user, `None` for guests
    pub session: Option<UserSession>,
    pub cart: CartState,
    pub wishlist: WishlistState,
}

impl AppState {
    /// Storage scope of the visible cart
    pub fn cart_scope(&self) -> CartScope {
        CartScope::for_session(self.session.as_ref())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
