//! Status bar widget showing result counts

use crate::catalog::CategoryFilter;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar with the `visible/total` count and the active category
pub struct StatusBar<'a> {
    shown: usize,
    total: usize,
    loading: bool,
    category: &'a CategoryFilter,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        shown: usize,
        total: usize,
        category: &'a CategoryFilter,
        theme: &'a Theme,
    ) -> Self {
        Self {
            shown,
            total,
            loading: false,
            category,
            theme,
        }
    }

    /// Mark the catalog as still loading
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn summary(&self) -> String {
        if self.loading {
            "Loading catalog...".to_string()
        } else {
            format!("{}/{} products", self.shown, self.total)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        Paragraph::new(Line::from(Span::raw(self.summary()))).render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            format!("[{}]", self.category.label()),
            self.theme.category_style(),
        )))
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::render_text;

    #[test]
    fn test_counts_and_category() {
        let theme = Theme::default();
        let text = render_text(
            StatusBar::new(1, 20, &CategoryFilter::All, &theme),
            60,
            3,
        );
        assert!(text.contains("1/20 products"));
        assert!(text.contains("[All Categories]"));
    }

    #[test]
    fn test_loading_replaces_counts() {
        let theme = Theme::default();
        let text = render_text(
            StatusBar::new(0, 0, &CategoryFilter::All, &theme).loading(true),
            60,
            3,
        );
        assert!(text.contains("Loading catalog..."));
        assert!(!text.contains("0/0"));
    }
}
