use crate::actions::{Action, BootstrapAction};
use crate::reducers::{cart_reducer, session_reducer, wishlist_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Bootstrap(BootstrapAction::Hydrated(_)) = action {
        state.hydrated = true;
    }

    // Run sub-reducers; each one picks the actions it cares about
    state.session = session_reducer::reduce(state.session, action);
    state.cart = cart_reducer::reduce(state.cart, action);
    state.wishlist = wishlist_reducer::reduce(state.wishlist, action);

    state
}
