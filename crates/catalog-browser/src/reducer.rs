use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    catalog_status_reducer, product_list_reducer, products_reducer, route_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    state.products = products_reducer::reduce(state.products, action);
    state.catalog = catalog_status_reducer::reduce(state.catalog, action);
    state.route = route_reducer::reduce(state.route, action);
    state.product_list =
        product_list_reducer::reduce(state.product_list, action, state.products.products.len());

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{set_products, CatalogAction};
    use crate::state::CatalogStatus;
    use catalog_client::ProductRecord;

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_set_products_updates_products_and_status() {
        let state = reduce(
            AppState::default(),
            &Action::Catalog(CatalogAction::FetchStarted),
        );
        assert_eq!(state.catalog, CatalogStatus::Loading);

        let products = vec![ProductRecord::new(1, "Shirt", 9.99, "clothing", "a.png")];
        let state = reduce(state, &set_products(products.clone()));
        assert_eq!(state.products.products, products);
        assert_eq!(state.catalog, CatalogStatus::Loaded);
    }

    #[test]
    fn test_fetch_failure_leaves_products_untouched() {
        let state = reduce(
            AppState::default(),
            &Action::Catalog(CatalogAction::FetchFailed("HTTP 500".to_string())),
        );
        assert!(state.products.products.is_empty());
        assert_eq!(state.catalog, CatalogStatus::Failed("HTTP 500".to_string()));
    }
}
