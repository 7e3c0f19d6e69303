//! Storage actions
//!
//! Dispatched by the persistence middleware after a mutation, so that they
//! are handled once the mutation has been reduced.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    /// Write the current cart lines to the active scope
    SyncCart,
    /// Write the current wishlist
    SyncWishlist,
}
