//! One-shot catalog loader
//!
//! The loader runs a single fetch on a tokio runtime and hands the outcome
//! to the view through a oneshot channel. The view drains it without
//! blocking from its event loop.
//!
//! Dropping the loader aborts the fetch. If the fetch completes after the
//! view is gone, the send fails and the response is discarded, so nothing
//! is ever written to a disposed view.

use super::error::CatalogError;
use super::source::CatalogSource;
use super::types::Product;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of one catalog fetch
pub type LoadOutcome = Result<Vec<Product>, CatalogError>;

/// Handle to an in-flight catalog fetch
#[derive(Debug)]
pub struct CatalogLoader {
    task: JoinHandle<()>,
    outcome: Option<oneshot::Receiver<LoadOutcome>>,
}

impl CatalogLoader {
    /// Start fetching the catalog on the given runtime
    #[must_use]
    pub fn spawn(runtime: &Handle, source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = oneshot::channel();

        let task = runtime.spawn(async move {
            let endpoint = source.describe();
            info!(%endpoint, "Fetching catalog");

            let outcome = source.fetch_catalog().await;
            match &outcome {
                Ok(products) => info!(count = products.len(), "Catalog fetched"),
                Err(e) => warn!(%endpoint, error = %e, "Error fetching the products"),
            }

            if tx.send(outcome).is_err() {
                debug!("View disposed before the catalog arrived, dropping response");
            }
        });

        Self {
            task,
            outcome: Some(rx),
        }
    }

    /// Take the outcome if the fetch has finished
    ///
    /// Returns `None` while the fetch is still running and after the outcome
    /// has already been taken.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let rx = self.outcome.as_mut()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.outcome = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.outcome = None;
                Some(Err(CatalogError::Interrupted))
            }
        }
    }

    /// Whether the outcome has not been taken yet
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.outcome.is_some()
    }

    /// Wait for the outcome
    pub async fn finish(mut self) -> LoadOutcome {
        match self.outcome.take() {
            Some(rx) => rx.await.unwrap_or(Err(CatalogError::Interrupted)),
            None => Err(CatalogError::Interrupted),
        }
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{GatedSource, StaticSource, sample_catalog};
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    #[tokio::test]
    async fn test_finish_delivers_catalog() {
        let source = Arc::new(StaticSource::ok(sample_catalog()));
        let loader = CatalogLoader::spawn(&Handle::current(), source);

        let products = loader.finish().await.unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_finish_delivers_failure() {
        let source = Arc::new(StaticSource::failing(503));
        let loader = CatalogLoader::spawn(&Handle::current(), source);

        let result = loader.finish().await;
        assert!(matches!(result, Err(CatalogError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_poll_is_non_blocking_and_single_shot() {
        let source = GatedSource::new(sample_catalog());
        let gate = source.gate();
        let mut loader = CatalogLoader::spawn(&Handle::current(), Arc::new(source));

        assert!(loader.poll().is_none());
        assert!(loader.is_pending());

        gate.notify_one();
        let mut outcome = None;
        for _ in 0..100 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            outcome = loader.poll();
            if outcome.is_some() {
                break;
            }
        }

        assert_eq!(outcome.unwrap().unwrap().len(), 2);
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }

    #[tokio::test]
    async fn test_drop_aborts_fetch() {
        let source = GatedSource::new(sample_catalog());
        let gate = source.gate();
        let completed = source.completed();
        let loader = CatalogLoader::spawn(&Handle::current(), Arc::new(source));

        // Let the task reach the gate, then dispose of the view
        tokio::time::sleep(Duration::from_millis(10)).await;
        drop(loader);

        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }
}
