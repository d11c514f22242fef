//! View models
//!
//! Separate presentation logic from state and rendering.

pub mod product_detail_view_model;
pub mod product_list_view_model;

pub use product_detail_view_model::{ProductDetailViewModel, ProductDetails};
pub use product_list_view_model::{ProductCardViewModel, ProductListViewModel};
