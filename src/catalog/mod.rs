//! Product catalog: data model, remote source, loader and filter
//!
//! The catalog is fetched once per view activation and replaced wholesale
//! on success. Everything the view shows is derived from it by the pure
//! functions in [`filter`].
//!
//! ```text
//! CatalogSource ──fetch──▶ CatalogLoader ──oneshot──▶ view state
//!                                                      │
//!                                   FilterCriteria ────┤
//!                                                      ▼
//!                                              visible_indices
//! ```

mod error;
pub mod filter;
pub mod loader;
pub mod source;
mod types;

#[cfg(test)]
pub mod mock;

pub use error::{CatalogError, UnknownCategory};
pub use filter::{FilterCriteria, visible_indices, visible_products};
pub use loader::{CatalogLoader, LoadOutcome};
pub use source::{CatalogSource, DEFAULT_ENDPOINT, HttpCatalogSource, decode_catalog};
pub use types::{Category, CategoryFilter, Product, ProductId, Rating, format_price};
