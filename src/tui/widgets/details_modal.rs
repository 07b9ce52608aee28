//! Details modal widget for displaying a single product

use super::centered_rect;
use crate::catalog::Product;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Details modal widget that displays the selected product
pub struct DetailsModal<'a> {
    /// Product to display
    product: &'a Product,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(product: &'a Product, theme: &'a Theme) -> Self {
        Self { product, theme }
    }

    fn field(label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<20}"), Style::default().fg(Color::DarkGray)),
            value,
        ])
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        let product = self.product;

        let mut lines = vec![
            Line::from(Span::styled(
                product.title.clone(),
                self.theme.heading_style(),
            )),
            Line::from("─".repeat(70)),
            Line::default(),
            Self::field(
                "Price:",
                Span::styled(product.display_price(), self.theme.price_style()),
            ),
            Self::field(
                "Category:",
                Span::styled(
                    product.category.label().to_string(),
                    self.theme.category_style(),
                ),
            ),
            Self::field(
                "Available Quantity:",
                Span::raw(product.available_quantity().to_string()),
            ),
            Self::field(
                "Rating:",
                Span::raw(format!("{:.1} / 5", product.rating.rate)),
            ),
            Self::field(
                "Image:",
                Span::styled(product.image.clone(), self.theme.cursor_style()),
            ),
            Line::default(),
        ];

        if product.description.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no description)",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for line in product.description.lines() {
                lines.push(Line::from(Span::raw(line.to_string())));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from("─".repeat(70)));
        lines.push(Line::from(Span::styled(
            "Esc / Enter / q to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(80, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Product Details ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        let paragraph = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false });
        paragraph.render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::sample_catalog;
    use crate::tui::widgets::test_support::render_text;

    #[test]
    fn test_shows_product_fields() {
        let theme = Theme::default();
        let catalog = sample_catalog();
        let necklace = &catalog[1];

        let text = render_text(DetailsModal::new(necklace, &theme), 120, 40);
        assert!(text.contains("Blue Necklace"));
        assert!(text.contains("$49.50"));
        assert!(text.contains("Available Quantity:"));
        assert!(text.contains("20"));
        assert!(text.contains("https://example.com/2.jpg"));
        assert!(text.contains("Description of Blue Necklace"));
    }
}
