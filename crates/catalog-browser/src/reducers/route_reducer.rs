use crate::actions::{Action, RouteAction};
use crate::router::Route;

/// Reduce the current route
pub fn reduce(state: Route, action: &Action) -> Route {
    match action {
        Action::Route(RouteAction::Navigate(route)) => {
            log::debug!("Route: {} -> {}", state.path(), route.path());
            route.clone()
        }
        Action::Route(RouteAction::Back) => {
            log::debug!("Route: {} -> /", state.path());
            Route::ProductList
        }
        _ => state,
    }
}
