//! Products Reducer
//!
//! The only real transition: `SetProducts` replaces the list wholesale.
//! Every other action, including the selection actions, returns the state
//! unchanged.

use crate::actions::{Action, ProductAction};
use crate::state::ProductsState;

/// Reduce product state
pub fn reduce(state: ProductsState, action: &Action) -> ProductsState {
    match action {
        // Reducers borrow the action, so each fetch result is copied once here
        Action::Product(ProductAction::SetProducts(products)) => ProductsState {
            products: products.clone(),
        },
        _ => state,
    }
}
