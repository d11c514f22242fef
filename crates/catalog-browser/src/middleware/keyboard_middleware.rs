//! KeyboardMiddleware - translates keyboard events into route-aware actions
//!
//! Priority keys (Ctrl+C, q) work everywhere. Everything else depends on
//! the active route:
//! - list: cursor movement and Enter to open the detail page
//! - detail / not-found: Esc, Backspace or h to go back to the list

use crate::actions::{
    clear_selected_product, select_product, Action, GlobalAction, NavigationAction, RouteAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::router::Route;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Char('q') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        match &state.route {
            Route::ProductList => Self::handle_list_key(key, state, dispatcher),
            Route::ProductDetail(_) | Route::NotFound(_) => {
                Self::handle_page_key(key, state, dispatcher)
            }
        }
    }

    fn handle_list_key(key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let nav = match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Right | KeyCode::Char('l') => {
                Some(NavigationAction::Next)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Left | KeyCode::Char('h') => {
                Some(NavigationAction::Previous)
            }
            KeyCode::Char('g') | KeyCode::Home => Some(NavigationAction::ToTop),
            KeyCode::Char('G') | KeyCode::End => Some(NavigationAction::ToBottom),
            _ => None,
        };

        if let Some(nav) = nav {
            dispatcher.dispatch(Action::Navigate(nav));
            return;
        }

        if key.code == KeyCode::Enter {
            let Some(product) = state.products.products.get(state.product_list.selected) else {
                log::debug!("Enter on empty product list ignored");
                return;
            };
            log::debug!("Opening product {}", product.id);
            dispatcher.dispatch(select_product(product.clone()));
            dispatcher.dispatch(Action::Route(RouteAction::Navigate(Route::ProductDetail(
                product.id.clone(),
            ))));
        }
    }

    fn handle_page_key(key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')
        ) {
            if matches!(state.route, Route::ProductDetail(_)) {
                dispatcher.dispatch(clear_selected_product());
            }
            dispatcher.dispatch(Action::Route(RouteAction::Back));
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false; // Raw keys never reach the reducer
        }
        true
    }
}
