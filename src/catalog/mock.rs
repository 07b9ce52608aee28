//! Mock catalog sources for testing
//!
//! Only available when compiled with `cfg(test)`.

use super::error::CatalogError;
use super::source::CatalogSource;
use super::types::{Category, Product, Rating};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Build a product with the fields the filter cares about
pub fn product(id: u64, title: &str, category: Category, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        category,
        image: format!("https://example.com/{id}.jpg"),
        description: format!("Description of {title}"),
        rating: Rating {
            rate: 4.0,
            count: u32::try_from(id * 10).unwrap_or(0),
        },
    }
}

/// The two-product catalog used by the acceptance scenarios
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", Category::MensClothing, 19.99),
        product(2, "Blue Necklace", Category::Jewelery, 49.5),
    ]
}

/// Source that answers immediately with a fixed result
pub struct StaticSource {
    products: Option<Vec<Product>>,
    status: u16,
}

impl StaticSource {
    pub const fn ok(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
            status: 200,
        }
    }

    pub const fn failing(status: u16) -> Self {
        Self {
            products: None,
            status,
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        self.products.clone().ok_or(CatalogError::Status {
            status: self.status,
        })
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Source that blocks until its gate is opened and counts its fetches
pub struct GatedSource {
    products: Vec<Product>,
    gate: Arc<Notify>,
    completed: Arc<AtomicBool>,
    fetches: Arc<AtomicUsize>,
}

impl GatedSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            gate: Arc::new(Notify::new()),
            completed: Arc::new(AtomicBool::new(false)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle used to release the pending fetch
    pub fn gate(&self) -> Arc<Notify> {
        Arc::clone(&self.gate)
    }

    /// Flag set once the fetch has returned
    pub fn completed(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.completed)
    }

    /// Number of fetches started so far
    pub fn fetches(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}
