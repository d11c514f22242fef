use crate::state::AppState;
use crate::view_models::{ProductDetailViewModel, ProductDetails};
use crate::views::{View, ViewId};
use catalog_client::ProductId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Product detail view - mounted for `/product/:productId`
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    product_id: ProductId,
}

impl ProductDetailView {
    pub fn new(product_id: ProductId) -> Self {
        Self { product_id }
    }
}

impl View for ProductDetailView {
    fn view_id(&self) -> ViewId {
        ViewId::ProductDetail
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let block = Block::default()
            .title(format!(" Product {} ", self.product_id))
            .title_style(theme.panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.card_border))
            .style(theme.panel_background());

        let lines = match ProductDetailViewModel::from_state(state, &self.product_id) {
            ProductDetailViewModel::Found(details) => detail_lines(&details, state),
            ProductDetailViewModel::Loading => {
                vec![Line::from(Span::styled("Loading products...", theme.muted()))]
            }
            ProductDetailViewModel::NotLoaded => vec![Line::from(Span::styled(
                "Products not loaded yet, press Esc to open the list",
                theme.muted(),
            ))],
            ProductDetailViewModel::Missing(id) => vec![Line::from(Span::styled(
                format!("Product not found: {}", id),
                Style::default().fg(theme.status_error),
            ))],
        };

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

fn detail_lines(details: &ProductDetails, state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let label = theme.muted();

    let mut lines = vec![
        Line::from(Span::styled(
            details.title.clone(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Price     ", label),
            Span::styled(details.price.clone(), Style::default().fg(theme.accent_price)),
        ]),
        Line::from(vec![
            Span::styled("Category  ", label),
            Span::styled(details.category.clone(), Style::default().fg(theme.text_secondary)),
        ]),
        Line::from(vec![
            Span::styled("Image     ", label),
            Span::styled(details.image.clone(), Style::default().fg(theme.text_secondary)),
        ]),
    ];

    if let Some(rating) = &details.rating {
        lines.push(Line::from(vec![
            Span::styled("Rating    ", label),
            Span::styled(rating.clone(), Style::default().fg(theme.status_warning)),
        ]));
    }

    if let Some(description) = &details.description {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(theme.text_primary),
        )));
    }

    lines
}
