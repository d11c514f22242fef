//! Product List Reducer
//!
//! Cursor movement over the product cards. Needs the product count, so it
//! takes it as an argument instead of reaching into the product state.

use crate::actions::{Action, NavigationAction, ProductAction};
use crate::state::ProductListState;

/// Reduce the list cursor
pub fn reduce(mut state: ProductListState, action: &Action, product_count: usize) -> ProductListState {
    match action {
        Action::Navigate(NavigationAction::Next) => {
            if product_count > 0 {
                state.selected = (state.selected + 1) % product_count;
            }
        }
        Action::Navigate(NavigationAction::Previous) => {
            if product_count > 0 {
                state.selected = if state.selected == 0 {
                    product_count - 1
                } else {
                    state.selected - 1
                };
            }
        }
        Action::Navigate(NavigationAction::ToTop) => {
            state.selected = 0;
        }
        Action::Navigate(NavigationAction::ToBottom) => {
            state.selected = product_count.saturating_sub(1);
        }
        Action::Product(ProductAction::SetProducts(products)) => {
            // Keep the cursor when possible, the list is usually the same
            if state.selected >= products.len() {
                state.selected = products.len().saturating_sub(1);
            }
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::set_products;
    use catalog_client::ProductRecord;

    fn at(selected: usize) -> ProductListState {
        ProductListState { selected }
    }

    #[test]
    fn test_next_wraps_around() {
        let next = Action::Navigate(NavigationAction::Next);
        assert_eq!(reduce(at(0), &next, 3), at(1));
        assert_eq!(reduce(at(2), &next, 3), at(0));
    }

    #[test]
    fn test_previous_wraps_around() {
        let prev = Action::Navigate(NavigationAction::Previous);
        assert_eq!(reduce(at(0), &prev, 3), at(2));
        assert_eq!(reduce(at(2), &prev, 3), at(1));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let next = Action::Navigate(NavigationAction::Next);
        let prev = Action::Navigate(NavigationAction::Previous);
        let bottom = Action::Navigate(NavigationAction::ToBottom);
        assert_eq!(reduce(at(0), &next, 0), at(0));
        assert_eq!(reduce(at(0), &prev, 0), at(0));
        assert_eq!(reduce(at(0), &bottom, 0), at(0));
    }

    #[test]
    fn test_top_and_bottom() {
        assert_eq!(reduce(at(3), &Action::Navigate(NavigationAction::ToTop), 5), at(0));
        assert_eq!(reduce(at(1), &Action::Navigate(NavigationAction::ToBottom), 5), at(4));
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let products = vec![ProductRecord::new(1, "Shirt", 9.99, "clothing", "a.png")];
        assert_eq!(reduce(at(7), &set_products(products), 10), at(0));
        assert_eq!(reduce(at(7), &set_products(vec![]), 10), at(0));
    }
}
