//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for shopview using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive storefront view (default)
//! - **list**: Print the filtered catalog and exit
//! - **config**: Show the effective configuration, its file location, or write it out
//!
//! Global flags override the configuration file and the environment:
//!
//! ```text
//! shopview --endpoint http://localhost:8080/products list -c jewelery
//! ```

use crate::catalog::{CategoryFilter, FilterCriteria};
use crate::config::{LoadingPolicy, ShopConfig};
use clap::{Args, Parser, Subcommand};

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write the effective configuration to the configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Shared arguments for commands that filter the catalog
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Initial search term, matched case-insensitively against titles
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Category to show (`all`, `electronics`, `jewelery`, `men's clothing`, `women's clothing`)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<CategoryFilter>,
}

impl FilterArgs {
    /// Filter criteria described by these arguments
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.search.clone().unwrap_or_default(),
            self.category.clone().unwrap_or_default(),
        )
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "shopview")]
#[command(about = "Browse a product catalog in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Product-listing endpoint (overrides config and SHOPVIEW_ENDPOINT)
    #[arg(short = 'e', long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Loading indicator behavior when the fetch fails
    #[arg(long = "loading-policy", value_enum, global = true)]
    pub loading_policy: Option<LoadingPolicy>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive storefront (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the products matching a search term and category
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the matching products as a JSON array
        #[arg(long = "json")]
        json: bool,
    },

    /// Inspect or initialize configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
        })
    }

    /// Apply global flag overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ShopConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(policy) = self.loading_policy {
            config.loading_policy = policy;
        }
    }
}
