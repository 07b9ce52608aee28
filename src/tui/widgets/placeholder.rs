//! Loading indicator and empty-state message

use crate::tui::state::Placeholder;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered message shown in place of the grid
pub struct PlaceholderView<'a> {
    kind: Placeholder,
    tick: usize,
    theme: &'a Theme,
}

impl<'a> PlaceholderView<'a> {
    #[must_use]
    pub const fn new(kind: Placeholder, tick: usize, theme: &'a Theme) -> Self {
        Self { kind, tick, theme }
    }

    fn line(&self) -> Line<'static> {
        match self.kind {
            Placeholder::Loading => Line::styled(
                format!("{} Loading products...", SPINNER[self.tick % SPINNER.len()]),
                self.theme.cursor_style(),
            ),
            Placeholder::Empty => Line::styled("No products found", self.theme.dimmed_style()),
        }
    }
}

impl Widget for PlaceholderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
