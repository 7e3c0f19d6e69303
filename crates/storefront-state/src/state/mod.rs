//! State module
//!
//! The state tree of the store. Each sub-state is owned by its own reducer.

mod app;
mod cart;
mod wishlist;

pub use app::AppState;
pub use cart::CartState;
pub use wishlist::WishlistState;
