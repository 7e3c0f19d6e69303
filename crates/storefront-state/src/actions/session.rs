//! Session actions

use crate::domain_models::UserSession;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// A user signed in; the cart switches to their scope
    Login(UserSession),
    /// The user signed out; the visible cart is emptied
    Logout,
}
