//! Catalog Middleware
//!
//! Owns the fetch-and-populate flow:
//! - Activating the product list route starts exactly one fetch
//! - A successful fetch dispatches `SetProducts`
//! - A failed fetch is logged; the product state is never touched
//! - Leaving the list route aborts a fetch that is still in flight

use crate::actions::{set_products, Action, CatalogAction, GlobalAction, RouteAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use catalog_client::CatalogClient;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Fetch the product listing once and dispatch the result
///
/// On failure nothing is dispatched to the product state; only the fetch
/// status is reported so the list view can tell "failed" from "empty".
pub async fn fetch_and_populate(client: &dyn CatalogClient, dispatcher: &Dispatcher) {
    match client.fetch_products().await {
        Ok(products) => {
            log::info!("Fetched {} products", products.len());
            dispatcher.dispatch(set_products(products));
        }
        Err(e) => {
            log::error!("Failed to fetch products: {}", e);
            dispatcher.dispatch(Action::Catalog(CatalogAction::FetchFailed(e.to_string())));
        }
    }
}

/// Middleware for the product listing fetch
pub struct CatalogMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn CatalogClient>,
    /// Whether the product list route is currently mounted
    list_active: bool,
    /// Fetch started by the current list activation
    in_flight: Option<JoinHandle<()>>,
}

impl CatalogMiddleware {
    /// Create a new catalog middleware
    pub fn new(client: Arc<dyn CatalogClient>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("catalog-fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client,
            list_active: false,
            in_flight: None,
        })
    }

    fn activate_list(&mut self, dispatcher: &Dispatcher) {
        self.list_active = true;
        log::info!("Product list activated, fetching products");
        dispatcher.dispatch(Action::Catalog(CatalogAction::FetchStarted));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            fetch_and_populate(client.as_ref(), &dispatcher).await;
        }));
    }

    fn deactivate_list(&mut self, dispatcher: Option<&Dispatcher>) {
        self.list_active = false;

        let Some(handle) = self.in_flight.take() else {
            return;
        };
        if handle.is_finished() {
            return;
        }

        handle.abort();
        log::info!("Product list left, cancelled in-flight fetch");
        if let Some(dispatcher) = dispatcher {
            dispatcher.dispatch(Action::Catalog(CatalogAction::FetchCancelled));
        }
    }
}

impl Middleware for CatalogMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Route(RouteAction::Navigate(route)) => {
                if route.is_product_list() && !self.list_active {
                    self.activate_list(dispatcher);
                } else if !route.is_product_list() && self.list_active {
                    self.deactivate_list(Some(dispatcher));
                }
            }
            Action::Route(RouteAction::Back) if !self.list_active => {
                self.activate_list(dispatcher);
            }
            Action::Global(GlobalAction::Quit) => {
                self.deactivate_list(None);
            }
            _ => {}
        }

        true
    }
}
