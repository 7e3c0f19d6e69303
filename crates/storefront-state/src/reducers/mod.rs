//! Reducers
//!
//! Pure functions `(state, action) -> state`. Nothing in here touches
//! storage or the clock.

pub mod app_reducer;
pub mod cart_reducer;
pub mod session_reducer;
pub mod wishlist_reducer;
