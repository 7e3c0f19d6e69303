use std::sync::mpsc::{channel, Receiver};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Store - holds application state and manages the Redux loop
///
/// Every action runs through the middleware chain first, then through the
/// root reducer. Actions queued by middleware are processed afterwards, in
/// the order they were queued.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }

        // Process any actions dispatched by middleware
        let pending_actions: Vec<Action> = self.action_rx.try_iter().collect();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, SessionAction};
    use crate::domain_models::{CartItem, Product, UserSession};
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    /// Records every action it sees and consumes logouts
    struct Recorder {
        seen: Arc<Mutex<Vec<Action>>>,
    }

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            self.seen.lock().unwrap().push(action.clone());
            if let Action::Session(SessionAction::Login(_)) = action {
                dispatcher.dispatch(Action::Cart(CartAction::Clear));
            }
            !matches!(action, Action::Session(SessionAction::Logout))
        }
    }

    fn item() -> CartItem {
        CartItem::from_product(&Product::new("p1", "Mug", Decimal::from(8)).with_stock(2), 1)
    }

    #[test]
    fn test_dispatch_without_middleware() {
        let mut store = Store::default();
        store.dispatch(Action::Cart(CartAction::AddItem(item())));
        assert_eq!(store.state().cart.items, vec![item()]);
    }

    #[test]
    fn test_middleware_can_consume_actions() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::default();
        store.add_middleware(Box::new(Recorder { seen: seen.clone() }));

        store.dispatch(Action::Session(SessionAction::Login(UserSession::new(
            "u1", "Jane", "j@example.com",
        ))));
        store.dispatch(Action::Session(SessionAction::Logout));

        // Logout was consumed before reaching the reducer
        assert!(store.state().session.is_some());
        // The follow-up queued during login ran after it
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1], Action::Cart(CartAction::Clear));
    }
}
