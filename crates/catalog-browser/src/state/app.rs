//! Application State

use super::{CatalogStatus, ProductListState, ProductsState};
use crate::router::Route;
use crate::theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Product records (replaced wholesale on each successful fetch)
    pub products: ProductsState,
    /// Fetch status of the listing
    pub catalog: CatalogStatus,
    /// Current location
    pub route: Route,
    pub product_list: ProductListState,
    pub theme: Theme,
    /// Endpoint shown in the header
    pub endpoint: String,
}

impl AppState {
    /// Create state for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            products: ProductsState::default(),
            catalog: CatalogStatus::default(),
            route: Route::default(),
            product_list: ProductListState::default(),
            theme: Theme::default(),
            endpoint: catalog_client::DEFAULT_ENDPOINT.to_string(),
        }
    }
}
