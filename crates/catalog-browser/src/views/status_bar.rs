//! Header and status bar widgets
//!
//! Header: `Catalog  <route path>               <endpoint>`
//! Status bar: fetch status on the left, key hints for the active route on the right.

use crate::router::Route;
use crate::state::{AppState, CatalogStatus};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Top bar showing the current location
pub struct HeaderWidget<'a>(pub &'a AppState);

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.0;
        let theme = &state.theme;

        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_panel).set_char(' ');
        }

        let title = " Catalog ";
        buf.set_string(area.x, area.y, title, theme.panel_title());
        let path = state.route.path();
        buf.set_string(
            area.x + title.len() as u16 + 1,
            area.y,
            &path,
            Style::default().fg(theme.text_primary),
        );

        // Endpoint on the right, only when it fits
        let used = title.len() + path.len() + 3;
        let endpoint_width = state.endpoint.chars().count() + 1;
        if used + endpoint_width <= area.width as usize {
            let x = area.x + area.width - endpoint_width as u16;
            buf.set_string(x, area.y, &state.endpoint, theme.muted());
        }
    }
}

/// Bottom bar with fetch status and key hints
pub struct StatusBarWidget<'a>(pub &'a AppState);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.0;
        let theme = &state.theme;

        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_panel).set_char(' ');
        }

        let (status, status_color) = match &state.catalog {
            CatalogStatus::Idle => (String::new(), theme.text_muted),
            CatalogStatus::Loading => ("Loading products...".to_string(), theme.status_warning),
            CatalogStatus::Loaded => (
                format!("{} products", state.products.products.len()),
                theme.status_success,
            ),
            CatalogStatus::Failed(reason) => (format!("Fetch failed: {}", reason), theme.status_error),
        };
        buf.set_string(area.x + 1, area.y, &status, Style::default().fg(status_color));

        let hints: &[(&str, &str)] = match state.route {
            Route::ProductList => &[("j/k", "move"), ("Enter", "open"), ("q", "quit")],
            Route::ProductDetail(_) | Route::NotFound(_) => &[("Esc", "back"), ("q", "quit")],
        };

        let width: usize = hints.iter().map(|(k, d)| k.len() + d.len() + 3).sum();
        if width + status.chars().count() + 2 > area.width as usize {
            return;
        }

        let mut x = area.x + area.width - width as u16;
        for (key, desc) in hints {
            buf.set_string(x, area.y, key, theme.key_hint());
            x += key.len() as u16 + 1;
            buf.set_string(x, area.y, desc, theme.muted());
            x += desc.len() as u16 + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::router::Route;
    use crate::state::{AppState, CatalogStatus};
    use crate::views::test_support::render_rows;

    #[test]
    fn test_status_bar_shows_failure_reason() {
        let mut state = AppState::default();
        state.catalog = CatalogStatus::Failed("unexpected HTTP status 500".to_string());
        let rows = render_rows(&state, 120, 10);
        assert!(rows[9].contains("Fetch failed: unexpected HTTP status 500"));
    }

    #[test]
    fn test_key_hints_follow_route() {
        let mut state = AppState::default();
        let rows = render_rows(&state, 100, 10);
        assert!(rows[9].contains("Enter open"));

        state.route = Route::NotFound("/nope".to_string());
        let rows = render_rows(&state, 100, 10);
        assert!(rows[9].contains("Esc back"));
        assert!(!rows[9].contains("Enter open"));
    }
}
