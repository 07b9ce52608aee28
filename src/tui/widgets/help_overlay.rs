//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 3] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ]
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<16}"), Style::default().fg(self.theme.cursor)),
            Span::raw(desc),
        ])
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Products"));
        lines.extend([
            self.help_line("  ←/→", "Previous / next product"),
            self.help_line("  ↑/↓", "Previous / next row"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "First / last product"),
            self.help_line("  Enter", "Show product details"),
            self.help_line("  Esc", "Close overlay / quit"),
        ]);

        lines.extend(self.section("  Search"));
        lines.extend([
            self.help_line("  Type", "Filter by title"),
            self.help_line("  Backspace", "Delete character"),
            self.help_line("  Ctrl+U", "Clear search"),
            self.help_line("  Ctrl+W", "Delete word"),
        ]);

        lines.extend(self.section("  Categories"));
        lines.extend([
            self.help_line("  Tab/Shift+Tab", "Next / previous category"),
            self.help_line("  F2 or Ctrl+O", "Open category panel"),
        ]);

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());

        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
