//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod catalog_status;
mod product_list;
mod products;

pub use app::AppState;
pub use catalog_status::CatalogStatus;
pub use product_list::ProductListState;
pub use products::ProductsState;
