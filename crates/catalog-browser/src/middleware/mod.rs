use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod catalog_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs synchronously inside `Store::dispatch`. Anything slow
/// (network calls) must be spawned and report back through the Dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (before this action is reduced)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
