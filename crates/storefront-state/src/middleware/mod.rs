use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging_middleware;
pub mod persistence_middleware;

pub use logging_middleware::LoggingMiddleware;
pub use persistence_middleware::PersistenceMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where side effects live (storage reads and writes), keeping
/// the reducers pure.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot, before this action is reduced)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
