//! Actions module
//!
//! Actions are tagged by domain:
//! - `Global`: application-wide actions (raw key input, quit)
//! - `Navigate`: generic cursor movement, translated by the list reducer
//! - `Route`: location changes (list, detail, not-found)
//! - `Product`: the product state transitions and their creators
//! - `Catalog`: fetch lifecycle, kept apart from the product state

pub mod catalog;
pub mod global;
pub mod navigation;
pub mod product;
pub mod route;

pub use catalog::CatalogAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use product::{clear_selected_product, select_product, set_products, ProductAction};
pub use route::RouteAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Generic cursor navigation
    Navigate(NavigationAction),
    /// Route changes
    Route(RouteAction),
    /// Product state actions
    Product(ProductAction),
    /// Fetch lifecycle actions
    Catalog(CatalogAction),

    /// No-op action
    None,
}
