//! Catalog filtering used by the view and the list command
//!
//! A product is visible when its case-folded title contains the case-folded
//! search term and it passes the category filter. Filtering is a pure
//! function of its inputs and keeps catalog order.

use super::types::{CategoryFilter, Product};

/// The two inputs the visible sequence depends on besides the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text search term, matched against titles
    pub search: String,
    /// Selected category or the "all" sentinel
    pub category: CategoryFilter,
}

impl FilterCriteria {
    /// Create filter criteria
    #[must_use]
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Check whether a single product passes
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        matches_folded(product, &self.search.to_lowercase(), &self.category)
    }
}

fn matches_folded(product: &Product, needle: &str, category: &CategoryFilter) -> bool {
    product.title.to_lowercase().contains(needle) && category.matches(&product.category)
}

/// Indices of the visible products, in catalog order
#[must_use]
pub fn visible_indices(catalog: &[Product], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.search.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| matches_folded(product, &needle, &criteria.category))
        .map(|(idx, _)| idx)
        .collect()
}

/// The visible products themselves, in catalog order
#[must_use]
pub fn visible_products<'a>(catalog: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    visible_indices(catalog, criteria)
        .into_iter()
        .map(|idx| &catalog[idx])
        .collect()
}
