//! Domain models
//!
//! Core domain types used throughout the store.
//! These are pure domain concepts, separate from the state tree.

pub mod cart_item;
pub mod cart_scope;
pub mod ids;
pub mod payment_method;
pub mod pricing;
pub mod product;
pub mod shipping_address;
pub mod user_session;
pub mod wishlist_item;

pub use cart_item::{validate_quantity, CartItem};
pub use cart_scope::CartScope;
pub use ids::{ProductId, UserId};
pub use payment_method::PaymentMethod;
pub use pricing::PriceSummary;
pub use product::Product;
pub use shipping_address::ShippingAddress;
pub use user_session::UserSession;
pub use wishlist_item::WishlistItem;
