//! Config command - inspect or initialize the configuration

use crate::{Result, ShopviewError, cli::ConfigCommands, config::ShopConfig};
use std::path::Path;
use tracing::info;

/// Execute a config subcommand
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or its path
/// cannot be determined, or if `init` would overwrite an existing file
/// without `--force`.
pub fn execute(command: &ConfigCommands, config: &ShopConfig, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", ShopConfig::config_path()?.display()),
        ConfigCommands::Init { force } => {
            let path = ShopConfig::config_path()?;
            init(config, &path, *force)?;
            if !quiet {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

/// Write `config` to `path`, refusing to replace an existing file unless forced
///
/// # Errors
///
/// Returns `InvalidInput` if the file exists and `force` is false, or a
/// configuration error if the file cannot be written.
pub fn init(config: &ShopConfig, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ShopviewError::InvalidInput(format!(
            "Config file '{}' already exists, pass --force to overwrite it",
            path.display()
        )));
    }

    config.save_to(path)?;
    info!(path = %path.display(), "Configuration written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadingPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn custom() -> ShopConfig {
        ShopConfig {
            endpoint: "http://localhost:8080/products".to_string(),
            loading_policy: LoadingPolicy::Keep,
            ..ShopConfig::default()
        }
    }

    #[test]
    fn test_init_writes_effective_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shopview").join("config.toml");

        init(&custom(), &path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("endpoint = \"http://localhost:8080/products\""));
        assert!(written.contains("loading_policy = \"keep\""));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = \"Mine\"\n").unwrap();

        let result = init(&custom(), &path, false);
        assert!(matches!(result, Err(ShopviewError::InvalidInput(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"Mine\"\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = \"Mine\"\n").unwrap();

        init(&ShopConfig::default(), &path, true).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("title = \"ECommerce Store\""));
        assert!(!written.contains("Mine"));
    }
}
