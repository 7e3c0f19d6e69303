//! Dispatcher for middleware action dispatch
//!
//! When middleware needs follow-up actions, it uses the Dispatcher. Actions
//! dispatched here are queued and processed by the store once the current
//! action has gone through the reducer, re-entering the middleware chain
//! from the beginning.
//!
//! This enables patterns like:
//! - `Session::Login` triggers `Cart::Restored` with the lines of the new scope
//! - `Cart::AddItem` triggers `Storage::SyncCart`, which then sees the updated cart

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
