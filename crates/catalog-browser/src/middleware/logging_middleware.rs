use crate::actions::{Action, GlobalAction, ProductAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Product lists can be large, log the count only
            Action::Product(ProductAction::SetProducts(products)) => {
                log::debug!("Action: Product(SetProducts({} products))", products.len());
            }
            // Key presses are logged by the keyboard middleware after translation
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut middleware = LoggingMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = AppState::default();

        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
        assert!(middleware.handle(&crate::actions::set_products(vec![]), &state, &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
