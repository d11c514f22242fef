//! Reducers Module
//!
//! Each reducer owns one slice of `AppState` and is a pure function of that
//! slice and the action.

pub mod catalog_status_reducer;
pub mod product_list_reducer;
pub mod products_reducer;
pub mod route_reducer;
