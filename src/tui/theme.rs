//! Color theme definitions for the storefront view

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the highlighted card border and cursor indicators
    pub cursor: Color,
    /// Color for the page heading
    pub heading: Color,
    /// Color for prices
    pub price: Color,
    /// Color for category names
    pub category: Color,
    /// Background color for the selected tab / menu entry
    pub selection_bg: Color,
    /// Foreground color for the selected tab / menu entry
    pub selection_fg: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            cursor: Color::Cyan,
            heading: Color::White,
            price: Color::Green,
            category: Color::Magenta,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the selected tab or menu entry
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator and focused borders
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the page heading
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for product titles on cards
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for prices
    #[must_use]
    pub fn price_style(&self) -> Style {
        Style::default().fg(self.price)
    }

    /// Style for category names
    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
