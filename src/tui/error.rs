//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The view was started without a terminal to draw on
    #[error("The storefront view requires an interactive terminal")]
    NotATerminal,
}

impl From<std::convert::Infallible> for UiError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
