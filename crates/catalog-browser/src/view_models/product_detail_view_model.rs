//! View model for the product detail page

use super::product_list_view_model::format_price;
use crate::state::{AppState, CatalogStatus};
use catalog_client::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailViewModel {
    Found(ProductDetails),
    /// Products are still being fetched
    Loading,
    /// The list was never fetched (started directly on a detail route)
    NotLoaded,
    /// No product with this id in the current list
    Missing(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub title: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub description: Option<String>,
    /// "4.1 / 5 (259 ratings)"
    pub rating: Option<String>,
}

impl ProductDetailViewModel {
    pub fn from_state(state: &AppState, id: &ProductId) -> Self {
        let Some(product) = state.products.find(id) else {
            if !state.products.products.is_empty() {
                return Self::Missing(id.to_string());
            }
            return match state.catalog {
                CatalogStatus::Loading => Self::Loading,
                CatalogStatus::Idle => Self::NotLoaded,
                CatalogStatus::Loaded | CatalogStatus::Failed(_) => Self::Missing(id.to_string()),
            };
        };

        Self::Found(ProductDetails {
            title: product.title.clone(),
            price: format_price(product.price),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            rating: product
                .rating
                .map(|r| format!("{:.1} / 5 ({} ratings)", r.rate, r.count)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::{ProductRecord, Rating};

    fn state_with(product: ProductRecord) -> AppState {
        let mut state = AppState::default();
        state.products.products = vec![product];
        state.catalog = CatalogStatus::Loaded;
        state
    }

    #[test]
    fn test_found_with_rating_and_description() {
        let mut product = ProductRecord::new(3, "Lamp", 19.5, "home", "lamp.png");
        product.description = Some("Bright".to_string());
        product.rating = Some(Rating {
            rate: 4.13,
            count: 259,
        });

        let vm = ProductDetailViewModel::from_state(&state_with(product), &ProductId::Number(3));
        let ProductDetailViewModel::Found(details) = vm else {
            panic!("expected product");
        };
        assert_eq!(details.price, "19.50");
        assert_eq!(details.description.as_deref(), Some("Bright"));
        assert_eq!(details.rating.as_deref(), Some("4.1 / 5 (259 ratings)"));
    }

    #[test]
    fn test_missing_product() {
        let state = state_with(ProductRecord::new(3, "Lamp", 19.5, "home", "lamp.png"));
        assert_eq!(
            ProductDetailViewModel::from_state(&state, &ProductId::Number(4)),
            ProductDetailViewModel::Missing("4".to_string())
        );
    }

    #[test]
    fn test_text_id_found_through_numeric_route() {
        let state = state_with(ProductRecord::new(
            ProductId::Text("3".to_string()),
            "Lamp",
            19.5,
            "home",
            "lamp.png",
        ));
        let crate::router::Route::ProductDetail(id) = crate::router::Route::parse("/product/3") else {
            panic!("expected detail route");
        };
        assert!(matches!(
            ProductDetailViewModel::from_state(&state, &id),
            ProductDetailViewModel::Found(_)
        ));
    }

    #[test]
    fn test_started_on_detail_route_before_any_fetch() {
        let state = AppState::default();
        assert_eq!(state.catalog, CatalogStatus::Idle);
        assert_eq!(
            ProductDetailViewModel::from_state(&state, &ProductId::Number(3)),
            ProductDetailViewModel::NotLoaded
        );
    }

    #[test]
    fn test_loading_while_list_is_fetched() {
        let mut state = AppState::default();
        state.catalog = CatalogStatus::Loading;
        assert_eq!(
            ProductDetailViewModel::from_state(&state, &ProductId::Number(1)),
            ProductDetailViewModel::Loading
        );
    }
}
