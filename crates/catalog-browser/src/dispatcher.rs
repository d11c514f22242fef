//! Dispatcher for middleware and async tasks
//!
//! Middleware and background fetch tasks never touch the store directly.
//! They send actions through the Dispatcher; the store drains the channel
//! on the main thread and runs each action through the full chain.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for queueing actions into the store
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// A store that has gone away drops the action (logged).
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
