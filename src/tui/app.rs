//! Storefront view: terminal lifecycle, event loop and layout
//!
//! The loop runs on the calling thread. The catalog fetch runs on the tokio
//! runtime passed to [`StorefrontApp::run`] and its outcome is drained once
//! per frame without blocking, see [`CatalogSession`].

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::session::CatalogSession;
use super::state::{Mode, ViewState};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, CategoryPanel, CategoryTabs, DetailsModal, HelpBar, HelpOverlay, PlaceholderView,
    ProductGrid, SearchBar, StatusBar, grid_columns,
};
use crate::catalog::CatalogSource;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// The interactive storefront
pub struct StorefrontApp {
    title: String,
    theme: Theme,
}

impl StorefrontApp {
    /// Create a storefront with the given page heading
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Activate the view, fetch the catalog and run until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if there is no terminal or drawing to it fails.
    /// Catalog fetch failures are logged and never returned.
    pub fn run(
        &self,
        runtime: &Handle,
        source: Arc<dyn CatalogSource>,
        state: ViewState,
    ) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, runtime, source, state);

        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        runtime: &Handle,
        source: Arc<dyn CatalogSource>,
        mut state: ViewState,
    ) -> Result<()> {
        let mut session = CatalogSession::start(&mut state, runtime, source);

        loop {
            self.draw_frame(terminal, &mut session, &mut state)?;

            match poll_and_handle(&mut state, POLL_TIMEOUT)? {
                EventResult::Quit => break,
                EventResult::FilterChanged => {
                    debug!(
                        search = state.search(),
                        category = %state.category(),
                        visible = state.visible_len(),
                        "Filter changed"
                    );
                }
                EventResult::Continue | EventResult::Ignored => {}
            }

            if state.should_exit {
                break;
            }
            state.tick = state.tick.wrapping_add(1);
        }

        Ok(())
    }

    /// Drain the catalog fetch into the state, then draw one frame
    fn draw_frame<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        session: &mut CatalogSession,
        state: &mut ViewState,
    ) -> Result<()>
    where
        UiError: From<B::Error>,
    {
        if session.pump(state) {
            debug!(visible = state.visible_len(), "Catalog applied to the view");
        }
        terminal.draw(|frame| self.render(frame, state))?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut ViewState) {
        let area = frame.area();
        let theme = &self.theme;

        let [header, search, tabs, content, status, help] = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Category tabs
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(self.title.as_str(), theme.heading_style()))
                .alignment(Alignment::Center),
            header,
        );

        let search_bar = SearchBar::new(state.search(), theme).focused(state.mode() == Mode::Normal);
        frame.render_widget(search_bar, search);

        frame.render_widget(CategoryTabs::new(state.category(), theme), tabs);

        state.set_viewport(
            grid_columns(content.width),
            usize::from(content.height / CARD_HEIGHT),
        );
        match state.placeholder() {
            Some(kind) => frame.render_widget(PlaceholderView::new(kind, state.tick, theme), content),
            None => frame.render_widget(ProductGrid::new(state, theme), content),
        }

        let status_bar = StatusBar::new(
            state.visible_len(),
            state.catalog().len(),
            state.category(),
            theme,
        )
        .loading(state.is_loading());
        frame.render_widget(status_bar, status);

        frame.render_widget(HelpBar::for_mode(state.mode(), theme), help);

        Self::render_overlays(frame, state, theme, area, tabs.union(content));
    }

    /// Render whichever overlay the current mode calls for
    fn render_overlays(
        frame: &mut Frame,
        state: &ViewState,
        theme: &Theme,
        area: Rect,
        body: Rect,
    ) {
        match state.mode() {
            Mode::Details => {
                if let Some(product) = state.selected() {
                    frame.render_widget(DetailsModal::new(product, theme), area);
                }
            }
            Mode::CategoryMenu => {
                let panel = CategoryPanel::new(state.category(), state.menu_cursor, theme);
                frame.render_widget(panel, body);
            }
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
            Mode::Normal => {}
        }
    }
}
