//! Ratatui-based storefront view
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              StorefrontApp                  │
//! │   (terminal setup, event loop, rendering)   │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ ViewState  │ │  Ratatui  │ │ Crossterm │
//! │ (+ filter) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! All state lives in [`ViewState`]; events mutate it through its methods
//! and widgets only read it.

mod app;
mod error;
mod events;
mod session;
mod state;
mod theme;
pub mod widgets;

pub use app::StorefrontApp;
pub use error::{Result, UiError};
pub use events::{EventResult, handle_key, poll_and_handle};
pub use session::CatalogSession;
pub use state::{Mode, Placeholder, ViewState};
pub use theme::Theme;
