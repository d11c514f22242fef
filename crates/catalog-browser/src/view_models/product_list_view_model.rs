//! View model for the product list
//!
//! Pre-computes display text and colors for the product cards so the view
//! only lays them out.

use crate::state::{AppState, CatalogStatus};
use crate::theme::Theme;
use catalog_client::ProductRecord;
use ratatui::style::Color;

/// What the list view shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListViewModel {
    /// Fetch in flight (or not started yet) and nothing to show
    Loading,
    /// Fetch failed and nothing to show
    Failed(String),
    /// Fetch succeeded with zero products
    Empty,
    /// Cards to render, cursor index
    Cards {
        cards: Vec<ProductCardViewModel>,
        selected: usize,
    },
}

/// View model for a single product card
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardViewModel {
    pub title: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub selected: bool,
    pub border_color: Color,
}

impl ProductCardViewModel {
    pub fn from_product(product: &ProductRecord, selected: bool, theme: &Theme) -> Self {
        Self {
            title: product.title.clone(),
            price: format_price(product.price),
            category: product.category.clone(),
            image: product.image.clone(),
            selected,
            border_color: if selected {
                theme.selected_border
            } else {
                theme.card_border
            },
        }
    }
}

impl ProductListViewModel {
    /// Transform state into display-ready view model
    ///
    /// Products already in the store are always shown, even while a refetch
    /// is running or after it failed.
    pub fn from_state(state: &AppState) -> Self {
        let products = &state.products.products;

        if products.is_empty() {
            return match &state.catalog {
                CatalogStatus::Idle | CatalogStatus::Loading => Self::Loading,
                CatalogStatus::Failed(reason) => Self::Failed(reason.clone()),
                CatalogStatus::Loaded => Self::Empty,
            };
        }

        let selected = state.product_list.selected.min(products.len() - 1);
        let cards = products
            .iter()
            .enumerate()
            .map(|(idx, p)| ProductCardViewModel::from_product(p, idx == selected, &state.theme))
            .collect();

        Self::Cards { cards, selected }
    }
}

/// Format a price with two decimals (currency unspecified)
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
