//! Browse command - interactive storefront view

use crate::{
    Result,
    catalog::{CatalogSource, FilterCriteria, HttpCatalogSource},
    config::ShopConfig,
    tui::{StorefrontApp, ViewState},
};
use std::sync::Arc;
use tracing::info;

/// Execute the browse command
///
/// Blocks until the user leaves the view. A failed catalog fetch does not
/// end the view; it is only logged.
///
/// # Errors
///
/// Returns an error if the runtime or HTTP client cannot be created, or if
/// the terminal cannot be driven.
pub fn execute(config: &ShopConfig, criteria: FilterCriteria) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalogSource::new(&config.endpoint)?);
    let state = ViewState::new(config.loading_policy).with_criteria(criteria);

    info!(endpoint = %config.endpoint, policy = ?config.loading_policy, "Opening storefront");
    let result = StorefrontApp::new(&config.title).run(runtime.handle(), source, state);

    // Do not wait for a fetch that is still in flight
    runtime.shutdown_background();
    info!("Storefront closed");

    Ok(result?)
}
