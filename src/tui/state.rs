//! View state for the storefront TUI
//!
//! Holds the catalog, the filter inputs, the derived visible sequence and
//! every piece of overlay state in one record. The visible sequence depends
//! on exactly three inputs (catalog, search term, category) and every
//! mutation of those goes through a method that calls [`ViewState::refilter`].

use crate::catalog::{CategoryFilter, FilterCriteria, LoadOutcome, Product, visible_indices};
use crate::config::LoadingPolicy;
use tracing::debug;

/// Which overlay, if any, currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Grid browsing, no overlay
    #[default]
    Normal,
    /// Detail overlay for the selected product is open
    Details,
    /// Category slide-over panel is open
    CategoryMenu,
    /// Help overlay is visible
    Help,
}

/// What the content area shows instead of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Loading indicator
    Loading,
    /// "No products found"
    Empty,
}

/// Application state for the storefront view
#[derive(Debug)]
pub struct ViewState {
    catalog: Vec<Product>,
    criteria: FilterCriteria,
    /// Indices into `catalog`, derived by `refilter`
    visible: Vec<usize>,
    /// Last product opened in the detail overlay
    selected: Option<Product>,
    mode: Mode,
    loading: bool,
    loading_policy: LoadingPolicy,
    /// Current cursor position in the visible sequence
    pub cursor: usize,
    /// First grid row shown
    scroll_row: usize,
    /// Grid columns, never zero
    columns: usize,
    /// Grid rows that fit on screen, never zero
    visible_rows: usize,
    /// Highlighted entry in the category slide-over
    pub menu_cursor: usize,
    /// Whether the view should exit
    pub should_exit: bool,
    /// Frame counter, drives the loading spinner
    pub tick: usize,
}

impl ViewState {
    /// Create an empty, inactive view state
    #[must_use]
    pub const fn new(loading_policy: LoadingPolicy) -> Self {
        Self {
            catalog: Vec::new(),
            criteria: FilterCriteria {
                search: String::new(),
                category: CategoryFilter::All,
            },
            visible: Vec::new(),
            selected: None,
            mode: Mode::Normal,
            loading: false,
            loading_policy,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
            menu_cursor: 0,
            should_exit: false,
            tick: 0,
        }
    }

    /// Start with the given search term and category
    #[must_use]
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.refilter();
        self
    }

    // ============================================================================
    // Catalog loading
    // ============================================================================

    /// Mark the view active: a catalog fetch is now in flight
    pub const fn activate(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of the catalog fetch
    ///
    /// Success replaces the catalog wholesale. Failure leaves it untouched
    /// and handles the loading flag according to the loading policy.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            Ok(products) => {
                self.catalog = products;
                self.loading = false;
                self.refilter();
            }
            Err(e) => {
                debug!(error = %e, policy = ?self.loading_policy, "Catalog left unchanged");
                if self.loading_policy == LoadingPolicy::Clear {
                    self.loading = false;
                }
            }
        }
    }

    /// Whether the loading indicator is up
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The full catalog
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    // ============================================================================
    // Filtering
    // ============================================================================

    /// Recompute the visible sequence from catalog, search term and category
    pub fn refilter(&mut self) {
        self.visible = visible_indices(&self.catalog, &self.criteria);
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// Current filter inputs
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current search term
    #[must_use]
    pub fn search(&self) -> &str {
        &self.criteria.search
    }

    /// Current category filter
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.criteria.category
    }

    /// Catalog indices of the visible products
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible products
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Visible product at a position in the visible sequence
    #[must_use]
    pub fn visible_product(&self, position: usize) -> Option<&Product> {
        self.visible
            .get(position)
            .and_then(|&idx| self.catalog.get(idx))
    }

    /// The visible products in order
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.visible.iter().filter_map(|&idx| self.catalog.get(idx))
    }

    /// Replace the search term
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.refilter();
    }

    /// Append a character to the search term
    pub fn search_push(&mut self, c: char) {
        self.criteria.search.push(c);
        self.refilter();
    }

    /// Remove the last character of the search term
    ///
    /// Returns `false` if the term was already empty.
    pub fn search_backspace(&mut self) -> bool {
        if self.criteria.search.pop().is_none() {
            return false;
        }
        self.refilter();
        true
    }

    /// Delete the last word of the search term
    ///
    /// Returns `false` if the term was already empty.
    pub fn search_delete_word(&mut self) -> bool {
        if self.criteria.search.is_empty() {
            return false;
        }
        let keep = self
            .criteria
            .search
            .trim_end()
            .rfind(' ')
            .map_or(0, |last_space| last_space + 1);
        self.criteria.search.truncate(keep);
        self.refilter();
        true
    }

    /// Clear the search term
    ///
    /// Returns `false` if the term was already empty.
    pub fn search_clear(&mut self) -> bool {
        if self.criteria.search.is_empty() {
            return false;
        }
        self.criteria.search.clear();
        self.refilter();
        true
    }

    /// Select a category filter
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.refilter();
    }

    /// Cycle to the next category in navigation order
    pub fn next_category(&mut self) {
        let options = CategoryFilter::options();
        let next = (self.criteria.category.position() + 1) % options.len();
        self.set_category(options[next].clone());
    }

    /// Cycle to the previous category in navigation order
    pub fn prev_category(&mut self) {
        let options = CategoryFilter::options();
        let prev = (self.criteria.category.position() + options.len() - 1) % options.len();
        self.set_category(options[prev].clone());
    }

    /// What to show instead of the grid, if anything
    ///
    /// The loading indicator and the empty-state message are mutually
    /// exclusive on the loading flag.
    #[must_use]
    pub fn placeholder(&self) -> Option<Placeholder> {
        if self.loading {
            Some(Placeholder::Loading)
        } else if self.visible.is_empty() {
            Some(Placeholder::Empty)
        } else {
            None
        }
    }

    // ============================================================================
    // Overlays
    // ============================================================================

    /// Current overlay mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Product bound to the detail overlay (kept after closing)
    #[must_use]
    pub const fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Whether the detail overlay is open
    #[must_use]
    pub const fn details_visible(&self) -> bool {
        matches!(self.mode, Mode::Details)
    }

    /// Whether the category slide-over is open
    #[must_use]
    pub const fn category_menu_visible(&self) -> bool {
        matches!(self.mode, Mode::CategoryMenu)
    }

    /// Bind a product and open the detail overlay
    pub fn open_details(&mut self, product: Product) {
        debug!(id = product.id, "Opening details");
        self.selected = Some(product);
        self.mode = Mode::Details;
    }

    /// Open the detail overlay for the product under the cursor
    ///
    /// Returns `false` if nothing is visible.
    pub fn open_current(&mut self) -> bool {
        match self.visible_product(self.cursor).cloned() {
            Some(product) => {
                self.open_details(product);
                true
            }
            None => false,
        }
    }

    /// Close the detail overlay, keeping the selected product
    pub fn close_details(&mut self) {
        if self.details_visible() {
            debug!("Closing details");
            self.mode = Mode::Normal;
        }
    }

    /// Open the category slide-over with the current filter highlighted
    pub fn open_category_menu(&mut self) {
        self.menu_cursor = self.criteria.category.position();
        self.mode = Mode::CategoryMenu;
    }

    /// Close the category slide-over without changing the filter
    pub fn close_category_menu(&mut self) {
        if self.category_menu_visible() {
            self.mode = Mode::Normal;
        }
    }

    /// Move the slide-over highlight up
    pub const fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    /// Move the slide-over highlight down
    pub fn menu_down(&mut self) {
        let last = CategoryFilter::options().len() - 1;
        self.menu_cursor = (self.menu_cursor + 1).min(last);
    }

    /// Apply the highlighted category and close the slide-over
    pub fn menu_select(&mut self) {
        if let Some(option) = CategoryFilter::options().get(self.menu_cursor) {
            debug!(category = %option, "Category selected from panel");
            self.set_category(option.clone());
        }
        self.close_category_menu();
    }

    /// Show the help overlay
    pub const fn open_help(&mut self) {
        self.mode = Mode::Help;
    }

    /// Hide the help overlay
    pub fn close_help(&mut self) {
        if self.mode == Mode::Help {
            self.mode = Mode::Normal;
        }
    }

    /// Mark the view to exit
    pub const fn quit(&mut self) {
        self.should_exit = true;
    }

    // ============================================================================
    // Grid navigation
    // ============================================================================

    /// Update the grid geometry measured during render
    pub fn set_viewport(&mut self, columns: usize, rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = rows.max(1);
        self.adjust_scroll();
    }

    /// Grid columns measured during the last render
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Grid rows that fit on screen
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// First grid row shown
    #[must_use]
    pub const fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Grid row of the cursor
    #[must_use]
    pub const fn cursor_row(&self) -> usize {
        self.cursor / self.columns
    }

    /// Move cursor to the previous card
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor to the next card
    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor one row up
    pub fn cursor_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
            self.adjust_scroll();
        }
    }

    /// Move cursor one row down, landing on the last card of a short final row
    pub fn cursor_down(&mut self) {
        let len = self.visible.len();
        if self.cursor + self.columns < len {
            self.cursor += self.columns;
        } else if len > 0 && self.cursor_row() < (len - 1) / self.columns {
            self.cursor = len - 1;
        } else {
            return;
        }
        self.adjust_scroll();
    }

    /// Move cursor up by one page of rows
    pub fn page_up(&mut self) {
        self.cursor = self
            .cursor
            .saturating_sub(self.columns * self.visible_rows);
        self.adjust_scroll();
    }

    /// Move cursor down by one page of rows
    pub fn page_down(&mut self) {
        let max_cursor = self.visible.len().saturating_sub(1);
        self.cursor = (self.cursor + self.columns * self.visible_rows).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first card
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last card
    pub fn jump_to_end(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep the cursor row visible
    fn adjust_scroll(&mut self) {
        let row = self.cursor_row();
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
    }
}
