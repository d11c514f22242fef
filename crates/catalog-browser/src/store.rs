use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Listener invoked after every dispatch with the new state
pub type Listener = Box<dyn FnMut(&AppState)>;

/// Handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Store - holds application state and manages the Redux loop
///
/// Dispatch is synchronous: middleware chain, reducer, then subscribers,
/// all on the caller's thread. Every dispatch notifies each subscriber
/// exactly once, also when middleware consumed the action.
///
/// Actions queued on the `Dispatcher` (by middleware or async tasks) are
/// not part of that dispatch. The main loop picks them up with
/// `process_pending`, in order, each as a dispatch of its own.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (runs in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register a listener, called after every dispatch
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
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

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }

        for (_, listener) in &mut self.subscribers {
            listener(&self.state);
        }
    }

    /// Dispatch every action queued on the dispatcher
    ///
    /// Called by the main loop to pick up follow-up actions and the results
    /// of async tasks. Actions queued while draining are drained as well.
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .field("subscribers", &format!("{} subscribers", self.subscribers.len()))
            .finish()
    }
}
