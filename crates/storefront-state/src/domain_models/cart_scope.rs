//! Cart storage scope
//!
//! Every user who ever signed in on this device keeps their own persisted
//! cart; without a session the shared guest cart is used.

use super::{UserId, UserSession};

const CART_KEY_PREFIX: &str = "cart";
const GUEST_SCOPE: &str = "guest";

/// Namespace the active cart is persisted under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CartScope {
    /// No session active
    Guest,
    /// Cart of a signed-in user
    User(UserId),
}

impl CartScope {
    /// Scope of the cart belonging to `session` (guest when none)
    pub fn for_session(session: Option<&UserSession>) -> Self {
        match session {
            Some(session) => CartScope::User(session.user_id.clone()),
            None => CartScope::Guest,
        }
    }

    /// Storage key of this scope: `cart:guest` or `cart:<userId>`
    pub fn storage_key(&self) -> String {
        match self {
            CartScope::Guest => format!("{}:{}", CART_KEY_PREFIX, GUEST_SCOPE),
            CartScope::User(user_id) => format!("{}:{}", CART_KEY_PREFIX, user_id),
        }
    }
}

impl std::fmt::Display for CartScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartScope::Guest => f.write_str(GUEST_SCOPE),
            CartScope::User(user_id) => write!(f, "user {}", user_id),
        }
    }
}
