//! Inline category tab row

use crate::catalog::CategoryFilter;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Tabs, Widget},
};

/// Tab row listing "All Categories" followed by every known category
pub struct CategoryTabs<'a> {
    /// Currently applied filter
    selected: &'a CategoryFilter,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> CategoryTabs<'a> {
    /// Create a new tab row
    #[must_use]
    pub const fn new(selected: &'a CategoryFilter, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for CategoryTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = CategoryFilter::options()
            .iter()
            .map(|option| format!(" {} ", option.label()))
            .collect::<Vec<_>>();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Categories (Tab / F2) ");

        Tabs::new(titles)
            .block(block)
            .select(self.selected.position())
            .style(self.theme.normal_style())
            .highlight_style(self.theme.selected_style())
            .divider(Span::styled("│", self.theme.dimmed_style()))
            .padding("", "")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::tui::widgets::test_support::render_text;

    #[test]
    fn test_lists_every_option() {
        let theme = Theme::default();
        let selected = CategoryFilter::Only(Category::Jewelery);
        let text = render_text(CategoryTabs::new(&selected, &theme), 120, 3);

        for label in [
            "All Categories",
            "Electronics",
            "Jewelery",
            "Men's Clothing",
            "Women's Clothing",
        ] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
