//! Structured logging setup
//!
//! The interactive view owns the terminal, so it logs to a file. The
//! non-interactive commands log to stderr. In both cases `RUST_LOG` takes
//! precedence over the configured `log_level`:
//!
//! ```bash
//! RUST_LOG=debug shopview
//! tail -f ~/.cache/shopview/shopview.log
//! ```

use crate::Result;
use crate::config::ShopConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize file logging for the interactive view
///
/// Returns the path of the log file. Initializing twice is a no-op.
///
/// # Errors
///
/// Returns an error if the log file location cannot be resolved or opened.
pub fn init_for_tui(config: &ShopConfig) -> Result<PathBuf> {
    let path = config.log_file_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(path)
}

/// Initialize stderr logging for non-interactive commands
pub fn init_for_cli(config: &ShopConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
