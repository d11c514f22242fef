//! Product state

use catalog_client::{ProductId, ProductRecord};

/// The product list, in API response order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<ProductRecord>,
}

impl ProductsState {
    /// Find a product by id
    ///
    /// Ids parsed from a route are numeric whenever they look numeric, so a
    /// text id such as `"3"` is matched by its printed form.
    pub fn find(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id.matches(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_numeric_looking_text_id_from_route() {
        let state = ProductsState {
            products: vec![ProductRecord::new(ProductId::Text("3".to_string()), "Lamp", 1.0, "home", "l.png")],
        };
        let from_route = ProductId::parse("3");
        assert_eq!(state.find(&from_route).map(|p| p.title.as_str()), Some("Lamp"));
        assert!(state.find(&ProductId::Number(4)).is_none());
    }
}
