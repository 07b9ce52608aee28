//! Command implementations
//!
//! Each command is a module with an execute function that takes the loaded
//! configuration and parsed CLI args.

pub mod browse;
pub mod config;
pub mod list;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use list::execute as list;
