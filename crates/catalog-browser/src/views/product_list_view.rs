use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{ProductCardViewModel, ProductListViewModel};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Minimum width of a product card
const CARD_MIN_WIDTH: u16 = 24;
/// Height of a product card, borders included
const CARD_HEIGHT: u16 = 6;
/// Cards per row on wide terminals
const MAX_COLUMNS: u16 = 4;

/// Product list view - grid of product cards
#[derive(Debug, Clone, Default)]
pub struct ProductListView;

impl ProductListView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ProductListView {
    fn view_id(&self) -> ViewId {
        ViewId::ProductList
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        f.render_widget(Block::default().style(state.theme.panel_background()), area);

        match ProductListViewModel::from_state(state) {
            ProductListViewModel::Loading => {
                render_message(f, area, "Loading products...", state.theme.muted())
            }
            ProductListViewModel::Failed(reason) => render_message(
                f,
                area,
                &format!("Could not load products: {}", reason),
                Style::default().fg(state.theme.status_error),
            ),
            ProductListViewModel::Empty => {
                render_message(f, area, "No products available", state.theme.muted())
            }
            ProductListViewModel::Cards { cards, selected } => {
                render_grid(f, area, &cards, selected, &state.theme)
            }
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, line_area);
}

/// Number of columns that fit into `width`
fn columns_for(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
}

/// First row to draw so the selected card stays visible
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

fn render_grid(
    f: &mut Frame,
    area: Rect,
    cards: &[ProductCardViewModel],
    selected: usize,
    theme: &Theme,
) {
    let columns = columns_for(area.width);
    let card_width = area.width / columns;
    // Row indices can exceed u16, only on-screen offsets are converted
    let columns = usize::from(columns);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(selected / columns, visible_rows);

    let first_idx = first_row * columns;
    let visible = cards.iter().enumerate().skip(first_idx).take(visible_rows * columns);
    for (idx, card) in visible {
        // Both bounded by the visible grid, so they fit into u16
        let screen_row = (idx / columns - first_row) as u16;
        let col = (idx % columns) as u16;

        let y = area.y + screen_row * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.y + area.height - y);
        let card_area = Rect {
            x: area.x + col * card_width,
            y,
            width: card_width,
            height,
        };
        render_card(f, card_area, card, theme);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &ProductCardViewModel, theme: &Theme) {
    let border_type = if card.selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(card.border_color))
        .style(theme.panel_background());

    let title_style = if card.selected {
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_primary)
    };

    let lines = vec![
        Line::from(Span::styled(card.title.clone(), title_style)),
        Line::from(Span::styled(
            card.price.clone(),
            Style::default()
                .fg(theme.accent_price)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.category.clone(),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(card.image.clone(), theme.muted())),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
