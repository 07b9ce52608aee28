//! Catalog fetch bound to one activation of the storefront view
//!
//! Starting a session marks the view as loading and spawns exactly one
//! fetch. The outcome is drained into the view state from the event loop.
//! Dropping the session aborts the fetch, so a response that arrives after
//! the view is gone never reaches its state.

use super::state::ViewState;
use crate::catalog::{CatalogLoader, CatalogSource};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

/// One activation of the view and its catalog fetch
#[derive(Debug)]
pub struct CatalogSession {
    loader: CatalogLoader,
}

impl CatalogSession {
    /// Activate the view and start its catalog fetch on `runtime`
    #[must_use]
    pub fn start(state: &mut ViewState, runtime: &Handle, source: Arc<dyn CatalogSource>) -> Self {
        state.activate();
        Self {
            loader: CatalogLoader::spawn(runtime, source),
        }
    }

    /// Apply the fetch outcome if it has arrived
    ///
    /// Returns `true` only on the call that applied it.
    pub fn pump(&mut self, state: &mut ViewState) -> bool {
        match self.loader.poll() {
            Some(outcome) => {
                state.apply_load(outcome);
                true
            }
            None => false,
        }
    }

    /// Whether the outcome has not reached the view yet
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.loader.is_pending()
    }
}

impl Drop for CatalogSession {
    fn drop(&mut self) {
        if self.loader.is_pending() {
            info!("Leaving the view with the catalog fetch still in flight");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{StaticSource, sample_catalog};
    use crate::config::LoadingPolicy;
    use std::time::Duration;

    async fn drain(session: &mut CatalogSession, state: &mut ViewState) -> bool {
        for _ in 0..100 {
            if session.pump(state) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_start_marks_view_loading() {
        let mut state = ViewState::new(LoadingPolicy::Clear);
        let source = Arc::new(StaticSource::ok(sample_catalog()));

        let session = CatalogSession::start(&mut state, &Handle::current(), source);
        assert!(state.is_loading());
        assert!(session.is_pending());
    }

    #[tokio::test]
    async fn test_pump_applies_outcome_once() {
        let mut state = ViewState::new(LoadingPolicy::Clear);
        let source = Arc::new(StaticSource::ok(sample_catalog()));
        let mut session = CatalogSession::start(&mut state, &Handle::current(), source);

        assert!(drain(&mut session, &mut state).await);
        assert!(!state.is_loading());
        assert_eq!(state.visible_len(), 2);
        assert!(!session.is_pending());

        // A later search must not be undone by a second apply
        state.set_search("shirt");
        assert!(!session.pump(&mut state));
        assert_eq!(state.visible_len(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_follows_policy() {
        let mut state = ViewState::new(LoadingPolicy::Keep);
        let source = Arc::new(StaticSource::failing(500));
        let mut session = CatalogSession::start(&mut state, &Handle::current(), source);

        assert!(drain(&mut session, &mut state).await);
        assert!(state.is_loading());
        assert!(state.catalog().is_empty());
    }
}
