//! Output formatting for CLI display
//!
//! Formats products for the `list` command, either as colored lines or as
//! JSON for scripting.

use crate::catalog::Product;
use colored::Colorize;

/// Format a product for display
///
/// In quiet mode only the title is printed.
#[must_use]
pub fn product_line(product: &Product, quiet: bool) -> String {
    if quiet {
        return product.title.clone();
    }

    format!(
        "  {}  {}  {}  {}",
        format!("#{}", product.id).dimmed(),
        product.display_price().green(),
        product.title.bold(),
        format!("[{}]", product.category.label()).magenta()
    )
}

/// Format every product, one line each
#[must_use]
pub fn product_lines(products: &[&Product], quiet: bool) -> Vec<String> {
    products
        .iter()
        .map(|product| product_line(product, quiet))
        .collect()
}

/// Serialize products as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn products_json(products: &[&Product]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(products)
}

/// Summary line printed after the listing
#[must_use]
pub fn summary(shown: usize, total: usize) -> String {
    format!("{shown} of {total} products").dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::sample_catalog;

    #[test]
    fn test_product_line_fields() {
        let catalog = sample_catalog();
        let line = product_line(&catalog[1], false);

        assert!(line.contains("#2"));
        assert!(line.contains("$49.50"));
        assert!(line.contains("Blue Necklace"));
        assert!(line.contains("[Jewelery]"));
    }

    #[test]
    fn test_quiet_prints_title_only() {
        let catalog = sample_catalog();
        assert_eq!(product_line(&catalog[0], true), "Red Shirt");

        let refs: Vec<&Product> = catalog.iter().collect();
        assert_eq!(product_lines(&refs, true), vec!["Red Shirt", "Blue Necklace"]);
    }

    #[test]
    fn test_products_json_uses_wire_names() {
        let catalog = sample_catalog();
        let refs: Vec<&Product> = catalog.iter().collect();
        let json = products_json(&refs).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["category"], "men's clothing");
        assert_eq!(value[1]["title"], "Blue Necklace");
        assert_eq!(value[1]["price"], 49.5);
        assert_eq!(value[1]["rating"]["count"], 20);
    }
}
