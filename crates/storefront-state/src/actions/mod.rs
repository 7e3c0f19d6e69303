//! Actions module
//!
//! All state changes are expressed as actions dispatched into the store.
//! Actions are tagged by domain:
//! - Bootstrap: start-up and hydration from storage
//! - Session: login / logout transitions
//! - Cart / Wishlist: mutations of the two stores
//! - Storage: follow-ups that persist post-transition state

pub mod bootstrap;
pub mod cart;
pub mod session;
pub mod storage;
pub mod wishlist;

pub use bootstrap::{BootstrapAction, PersistedState};
pub use cart::CartAction;
pub use session::SessionAction;
pub use storage::StorageAction;
pub use wishlist::WishlistAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start-up / hydration actions
    Bootstrap(BootstrapAction),
    /// Session transitions
    Session(SessionAction),
    /// Cart mutations
    Cart(CartAction),
    /// Wishlist mutations
    Wishlist(WishlistAction),
    /// Persistence follow-ups (handled by middleware, never reach reducers)
    Storage(StorageAction),
}
