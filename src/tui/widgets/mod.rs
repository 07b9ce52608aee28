//! Ratatui widgets for the storefront view
//!
//! Widgets only read view state; all mutation happens in the event handlers.

mod category_panel;
mod category_tabs;
mod details_modal;
mod help_bar;
mod help_overlay;
mod placeholder;
mod product_grid;
mod search_bar;
mod status_bar;

pub use category_panel::CategoryPanel;
pub use category_tabs::CategoryTabs;
pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint, hint_groups};
pub use help_overlay::HelpOverlay;
pub use placeholder::PlaceholderView;
pub use product_grid::{CARD_HEIGHT, ProductGrid, grid_columns, truncate};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Calculate a centered area as a percentage of `area`
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let width_percent = width_percent.min(90);
    let height_percent = height_percent.min(90);

    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}
