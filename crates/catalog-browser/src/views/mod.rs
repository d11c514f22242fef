use crate::router::Route;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod not_found_view;
pub mod product_detail_view;
pub mod product_list_view;
pub mod status_bar;

pub use not_found_view::NotFoundView;
pub use product_detail_view::ProductDetailView;
pub use product_list_view::ProductListView;
pub use status_bar::{HeaderWidget, StatusBarWidget};

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    ProductList,
    ProductDetail,
    NotFound,
}

/// View trait - defines the interface that all routed views implement
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view into the body area
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);
}

/// Resolve the view mounted for a route
pub fn view_for(route: &Route) -> Box<dyn View> {
    match route {
        Route::ProductList => Box::new(ProductListView::new()),
        Route::ProductDetail(id) => Box::new(ProductDetailView::new(id.clone())),
        Route::NotFound(path) => Box::new(NotFoundView::new(path.clone())),
    }
}

/// Render the whole screen: header, routed view, status bar
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(HeaderWidget(state), chunks[0]);
    view_for(&state.route).render(state, chunks[1], f);
    f.render_widget(StatusBarWidget(state), chunks[2]);
}


#[cfg(test)]
mod tests {
    use super::test_support::render_rows;
    use super::*;
    use catalog_client::ProductId;

    #[test]
    fn test_view_for_route() {
        assert_eq!(view_for(&Route::ProductList).view_id(), ViewId::ProductList);
        assert_eq!(
            view_for(&Route::ProductDetail(ProductId::Number(1))).view_id(),
            ViewId::ProductDetail
        );
        assert_eq!(
            view_for(&Route::NotFound("/x".to_string())).view_id(),
            ViewId::NotFound
        );
    }

    #[test]
    fn test_header_shows_route_path() {
        let mut state = AppState::default();
        state.route = Route::ProductDetail(ProductId::Number(7));
        let rows = render_rows(&state, 100, 12);
        assert!(rows[0].contains("Catalog"));
        assert!(rows[0].contains("/product/7"));
    }
}
