//! Search bar widget for the product search term

use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the search term with a trailing cursor
pub struct SearchBar<'a> {
    /// Current search term
    query: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = if self.focused {
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK))
        } else {
            Span::raw("")
        };

        let spans = if self.query.is_empty() {
            vec![
                Span::styled("> ", self.theme.dimmed_style()),
                cursor,
                Span::styled("Search products...", self.theme.dimmed_style()),
            ]
        } else {
            vec![
                Span::styled("> ", self.theme.dimmed_style()),
                Span::raw(self.query),
                cursor,
            ]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
