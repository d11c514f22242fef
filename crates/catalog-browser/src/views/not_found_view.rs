use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Fallback view for unmatched paths
#[derive(Debug, Clone)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl View for NotFoundView {
    fn view_id(&self) -> ViewId {
        ViewId::NotFound
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        f.render_widget(Block::default().style(theme.panel_background()), area);

        let lines = vec![
            Line::from(Span::styled(
                "404 Not Found",
                Style::default()
                    .fg(theme.status_error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.path.clone(), theme.muted())),
        ];

        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        let message_area = Rect {
            y: top,
            height: area.height.min(lines.len() as u16),
            ..area
        };
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            message_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::router::Route;
    use crate::state::AppState;
    use crate::views::test_support::{contains, render_rows};

    #[test]
    fn test_renders_not_found_indicator() {
        let mut state = AppState::default();
        state.route = Route::parse("/cart");
        let rows = render_rows(&state, 60, 10);
        assert!(contains(&rows, "404 Not Found"));
        assert!(contains(&rows, "/cart"));
    }
}
