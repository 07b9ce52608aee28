//! List command - print the filtered catalog

use crate::{
    Result,
    catalog::{CatalogLoader, CatalogSource, FilterCriteria, HttpCatalogSource, Product, visible_products},
    config::ShopConfig,
    output,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the catalog fetch fails. Unlike the interactive
/// view, `list` reports the failure and exits non-zero.
pub fn execute(config: &ShopConfig, criteria: &FilterCriteria, json: bool, quiet: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalogSource::new(&config.endpoint)?);
    let catalog = fetch_catalog(&runtime, source)?;

    for line in render(&catalog, criteria, json, quiet)? {
        println!("{line}");
    }
    Ok(())
}

/// Run one catalog fetch to completion
///
/// # Errors
///
/// Returns the fetch error, if any.
pub fn fetch_catalog(runtime: &Runtime, source: Arc<dyn CatalogSource>) -> Result<Vec<Product>> {
    let loader = CatalogLoader::spawn(runtime.handle(), source);
    Ok(runtime.block_on(loader.finish())?)
}

/// Lines to print for the products matching `criteria`
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    catalog: &[Product],
    criteria: &FilterCriteria,
    json: bool,
    quiet: bool,
) -> Result<Vec<String>> {
    let visible = visible_products(catalog, criteria);

    if json {
        return Ok(vec![output::products_json(&visible)?]);
    }

    if visible.is_empty() {
        return Ok(if quiet {
            Vec::new()
        } else {
            vec!["No products found".to_string()]
        });
    }

    let mut lines = output::product_lines(&visible, quiet);
    if !quiet {
        lines.push(output::summary(visible.len(), catalog.len()));
    }
    Ok(lines)
}
