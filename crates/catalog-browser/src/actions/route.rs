//! Route actions

use crate::router::Route;

/// Location changes
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    /// Make `Route` the active location
    Navigate(Route),
    /// Leave a detail or not-found page for the product list
    Back,
}
