//! Shopview - a terminal storefront for a remote product catalog
//!
//! This library fetches a product catalog from an HTTP endpoint once per
//! view activation, filters it by a free-text search term and a category,
//! and presents it as a card grid with a detail overlay.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod tui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShopviewError {
    /// Catalog fetch error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] tui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used by commands and the binary
pub type Result<T> = std::result::Result<T, ShopviewError>;
