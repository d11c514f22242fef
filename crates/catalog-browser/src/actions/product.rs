//! Product actions and their creators
//!
//! The creators are plain total functions. They never validate their input.

use super::Action;
use catalog_client::ProductRecord;

/// Actions on the product state
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Replace the product list wholesale
    SetProducts(Vec<ProductRecord>),
    /// A product was selected for the detail page
    SelectedProduct(ProductRecord),
    /// The detail page was left
    RemoveSelectedProduct,
}

/// Build the action that replaces the product list
pub fn set_products(products: Vec<ProductRecord>) -> Action {
    Action::Product(ProductAction::SetProducts(products))
}

/// Build the action announcing a selected product
pub fn select_product(product: ProductRecord) -> Action {
    Action::Product(ProductAction::SelectedProduct(product))
}

/// Build the action announcing that the selection was cleared
pub fn clear_selected_product() -> Action {
    Action::Product(ProductAction::RemoveSelectedProduct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> ProductRecord {
        ProductRecord::new(1, "Shirt", 9.99, "clothing", "a.png")
    }

    #[test]
    fn test_set_products_carries_payload() {
        let action = set_products(vec![shirt()]);
        assert_eq!(
            action,
            Action::Product(ProductAction::SetProducts(vec![shirt()]))
        );
    }

    #[test]
    fn test_set_products_accepts_empty_list() {
        assert_eq!(
            set_products(vec![]),
            Action::Product(ProductAction::SetProducts(vec![]))
        );
    }

    #[test]
    fn test_select_product() {
        assert_eq!(
            select_product(shirt()),
            Action::Product(ProductAction::SelectedProduct(shirt()))
        );
    }

    #[test]
    fn test_clear_selected_product() {
        assert_eq!(
            clear_selected_product(),
            Action::Product(ProductAction::RemoveSelectedProduct)
        );
    }
}
