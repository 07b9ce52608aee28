//! Category slide-over panel

use crate::catalog::CategoryFilter;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const PANEL_WIDTH: u16 = 30;

/// Panel docked to the right edge listing every category option
pub struct CategoryPanel<'a> {
    /// Currently applied filter
    active: &'a CategoryFilter,
    /// Highlighted entry
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> CategoryPanel<'a> {
    /// Create a new panel
    #[must_use]
    pub const fn new(active: &'a CategoryFilter, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            active,
            cursor,
            theme,
        }
    }

    /// Area the panel occupies inside `area`
    #[must_use]
    pub fn panel_area(area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height,
        }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];

        for (idx, option) in CategoryFilter::options().iter().enumerate() {
            let marker = if option == self.active { "● " } else { "  " };
            let style = if idx == self.cursor {
                self.theme.selected_style()
            } else {
                self.theme.normal_style()
            };
            let pointer = if idx == self.cursor { "▶ " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(pointer, self.theme.cursor_style()),
                Span::styled(marker, self.theme.category_style()),
                Span::styled(option.label().to_string(), style),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  ↑/↓ move  Enter select  Esc close",
            self.theme.dimmed_style(),
        ));
        lines
    }
}

impl Widget for CategoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Self::panel_area(area);

        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Categories ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(panel, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::render_lines;

    #[test]
    fn test_panel_docks_right() {
        let area = Rect::new(0, 0, 100, 20);
        let panel = CategoryPanel::panel_area(area);
        assert_eq!(panel.x, 70);
        assert_eq!(panel.width, PANEL_WIDTH);
        assert_eq!(panel.height, 20);

        let narrow = CategoryPanel::panel_area(Rect::new(0, 0, 20, 10));
        assert_eq!(narrow.x, 0);
        assert_eq!(narrow.width, 20);
    }

    #[test]
    fn test_cursor_marks_entry() {
        let theme = Theme::default();
        let lines = render_lines(
            CategoryPanel::new(&CategoryFilter::All, 2, &theme),
            60,
            12,
        );

        let jewelery = lines
            .iter()
            .find(|line| line.contains("Jewelery"))
            .unwrap();
        assert!(jewelery.contains('▶'));

        let all = lines
            .iter()
            .find(|line| line.contains("All Categories"))
            .unwrap();
        assert!(all.contains('●'));
        assert!(!all.contains('▶'));
    }
}
