//! Catalog error types

use super::types::ProductId;
use thiserror::Error;

/// Errors that can occur while fetching or decoding the catalog
///
/// Every variant is the same failure from the view's point of view: the
/// catalog fetch failed and the catalog stays as it was.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection, TLS, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Unexpected HTTP status {status}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The body was not a JSON array of products
    #[error("Malformed catalog body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A product decoded but violates the data model
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct {
        /// Identifier of the offending product
        id: ProductId,
        /// What is wrong with it
        reason: String,
    },

    /// The loader task ended without delivering a result
    #[error("Catalog loader stopped before delivering a result")]
    Interrupted,
}

/// A category name that is neither "all" nor one of the known categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown category '{0}' (expected all, electronics, jewelery, men's clothing or women's clothing)"
)]
pub struct UnknownCategory(pub String);
