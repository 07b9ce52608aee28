//! Remote catalog sources
//!
//! A [`CatalogSource`] produces the whole catalog or an error; there is no
//! partial result. [`HttpCatalogSource`] is the production implementation.

use super::error::CatalogError;
use super::types::Product;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Trait for anything that can deliver the product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be retrieved or decoded.
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;

    /// Short description for logs (e.g. the endpoint URL)
    fn describe(&self) -> String;
}

/// Catalog source backed by a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Create a source for the given product-listing endpoint
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Request` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(format!("shopview/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this source reads from
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_catalog(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Decode a response body into a catalog
///
/// The body must be a JSON array of products. Prices must be finite and
/// non-negative.
///
/// # Errors
///
/// Returns `CatalogError::Decode` for malformed JSON and
/// `CatalogError::InvalidProduct` for a product with an invalid price.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_slice(body)?;

    if let Some(bad) = products
        .iter()
        .find(|p| !p.price.is_finite() || p.price < 0.0)
    {
        return Err(CatalogError::InvalidProduct {
            id: bad.id,
            reason: format!("price {} is not a non-negative amount", bad.price),
        });
    }

    Ok(products)
}
