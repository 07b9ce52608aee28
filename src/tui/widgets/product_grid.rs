//! Responsive grid of product cards

use crate::tui::state::ViewState;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows a single card occupies, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Number of grid columns for a given width in cells
#[must_use]
pub const fn grid_columns(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..100 => 2,
        100..140 => 3,
        _ => 4,
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with `…`
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(width - 1).collect();
    short.push('…');
    short
}

/// Grid widget rendering the visible products as cards
///
/// Reads its geometry (`columns`, `visible_rows`, `scroll_row`) from the
/// view state, which the render pass sets before drawing.
pub struct ProductGrid<'a> {
    state: &'a ViewState,
    theme: &'a Theme,
}

impl<'a> ProductGrid<'a> {
    /// Create a new grid widget
    #[must_use]
    pub const fn new(state: &'a ViewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn render_card(&self, position: usize, area: Rect, buf: &mut Buffer) {
        let Some(product) = self.state.visible_product(position) else {
            return;
        };

        let border_style = if position == self.state.cursor {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let lines = vec![
            Line::styled(truncate(&product.title, width), self.theme.title_style()),
            Line::from(Span::styled(
                product.display_price(),
                self.theme.price_style(),
            )),
            Line::from(Span::styled(
                truncate(product.category.label(), width),
                self.theme.category_style(),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for ProductGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.state.columns();
        let rows = self.state.visible_rows();
        let first = self.state.scroll_row() * columns;

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);
        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
            for (col_idx, cell) in cells.iter().enumerate() {
                let position = first + row_idx * columns + col_idx;
                if position >= self.state.visible_len() {
                    return;
                }
                self.render_card(position, *cell, buf);
            }
        }
    }
}
