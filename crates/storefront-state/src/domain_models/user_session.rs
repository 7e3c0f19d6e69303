//! Authenticated user session

use serde::{Deserialize, Serialize};

use super::UserId;

/// The signed-in user, as handed over by the authentication collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserSession {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: UserId::new(user_id),
            name: name.into(),
            email: email.into(),
            is_admin: false,
        }
    }
}
