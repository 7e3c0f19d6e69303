//! Session Reducer

use crate::actions::{Action, BootstrapAction, SessionAction};
use crate::domain_models::UserSession;

pub fn reduce(session: Option<UserSession>, action: &Action) -> Option<UserSession> {
    match action {
        Action::Bootstrap(BootstrapAction::Hydrated(persisted)) => persisted.session.clone(),
        Action::Session(SessionAction::Login(new_session)) => {
            log::info!("Session: {} signed in", new_session.user_id);
            Some(new_session.clone())
        }
        Action::Session(SessionAction::Logout) => {
            if let Some(old) = &session {
                log::info!("Session: {} signed out", old.user_id);
            }
            None
        }
        _ => session,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_replaces_previous_session() {
        let a = UserSession::new("a", "A", "a@example.com");
        let b = UserSession::new("b", "B", "b@example.com");

        let session = reduce(None, &Action::Session(SessionAction::Login(a)));
        let session = reduce(session, &Action::Session(SessionAction::Login(b.clone())));
        assert_eq!(session, Some(b));

        assert_eq!(reduce(session, &Action::Session(SessionAction::Logout)), None);
    }

    #[test]
    fn test_logout_without_session() {
        assert_eq!(reduce(None, &Action::Session(SessionAction::Logout)), None);
    }
}
