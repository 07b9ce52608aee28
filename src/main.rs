//! Shopview CLI application entry point
//!
//! Opens an interactive storefront for a remote product catalog, or prints
//! the filtered catalog for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog interactively (default command)
//! shopview
//! shopview browse -s shirt -c "men's clothing"
//!
//! # Print matching products
//! shopview list -c jewelery
//! shopview -q list -s necklace
//! shopview list --json
//!
//! # Use another endpoint
//! SHOPVIEW_ENDPOINT=http://localhost:8080/products shopview
//! shopview --endpoint http://localhost:8080/products list
//! ```
//!
//! # Configuration
//!
//! Configuration is optional and stored in the user's config directory
//! (`~/.config/shopview/config.toml` on Linux). `shopview config show`
//! prints the effective values and `shopview config init` writes them out.

use shopview::{
    ShopviewError,
    cli::{Cli, Commands},
    commands,
    config::ShopConfig,
    logging,
};
use tracing::debug;

type Result<T> = std::result::Result<T, ShopviewError>;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = ShopConfig::load()?;
    cli.apply_overrides(&mut config);

    if config.endpoint.trim().is_empty() {
        return Err(ShopviewError::InvalidInput(
            "The catalog endpoint must not be empty".into(),
        ));
    }

    let command = cli.get_command();

    match &command {
        Commands::Browse { filter } => {
            let log_file = logging::init_for_tui(&config)?;
            if !cli.quiet {
                println!("Logging to {}", log_file.display());
            }
            commands::browse(&config, filter.criteria())?;
        }
        Commands::List { filter, json } => {
            logging::init_for_cli(&config);
            debug!(endpoint = %config.endpoint, "Listing catalog");
            commands::list(&config, &filter.criteria(), *json, cli.quiet)?;
        }
        Commands::Config { command } => {
            logging::init_for_cli(&config);
            commands::config(command, &config, cli.quiet)?;
        }
    }

    Ok(())
}
