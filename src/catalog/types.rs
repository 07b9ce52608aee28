//! Catalog data model

use super::error::UnknownCategory;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Stable product identifier as assigned by the endpoint
pub type ProductId = u64;

/// Product category
///
/// The wire spelling of the jewellery category is `jewelery`, which is what
/// the endpoint sends. `jewellery` is accepted as an alias. Matching is
/// otherwise exact and case-sensitive; anything else decodes to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Jewelery,
    MensClothing,
    WomensClothing,
    /// A category the endpoint sent that is not part of the fixed set
    Other(String),
}

impl Category {
    /// The fixed set of categories offered as filters
    pub const KNOWN: [Self; 4] = [
        Self::Electronics,
        Self::Jewelery,
        Self::MensClothing,
        Self::WomensClothing,
    ];

    /// Map a wire name to a category
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        Self::known(name).unwrap_or_else(|| Self::Other(name.to_string()))
    }

    fn known(name: &str) -> Option<Self> {
        match name {
            "electronics" => Some(Self::Electronics),
            "jewelery" | "jewellery" => Some(Self::Jewelery),
            "men's clothing" => Some(Self::MensClothing),
            "women's clothing" => Some(Self::WomensClothing),
            _ => None,
        }
    }

    /// Wire name of the category
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Electronics => "electronics",
            Self::Jewelery => "jewelery",
            Self::MensClothing => "men's clothing",
            Self::WomensClothing => "women's clothing",
            Self::Other(name) => name,
        }
    }

    /// Human-readable label for navigation
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Electronics => "Electronics",
            Self::Jewelery => "Jewelery",
            Self::MensClothing => "Men's Clothing",
            Self::WomensClothing => "Women's Clothing",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&name))
    }
}

/// Category filter: the "all" sentinel or one exact category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable option, "all" first, in navigation order
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::KNOWN.into_iter().map(Self::Only))
            .collect()
    }

    /// Check whether a product category passes this filter
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Human-readable label for navigation
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Categories",
            Self::Only(category) => category.label(),
        }
    }

    /// Name as accepted on the command line
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    /// Position of this filter in [`CategoryFilter::options`]
    #[must_use]
    pub fn position(&self) -> usize {
        Self::options()
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Category::known(s)
            .map(Self::Only)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Rating summary attached to each product
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    #[serde(default)]
    pub rate: f64,
    /// Number of available units
    #[serde(default)]
    pub count: u32,
}

/// A product as delivered by the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: Category,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Price formatted for display, e.g. `$49.50`
    #[must_use]
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Units available, as reported by the rating summary
    #[must_use]
    pub const fn available_quantity(&self) -> u32 {
        self.rating.count
    }
}

/// Format a price with a currency prefix and two decimal places
///
/// Values exactly halfway between two cents round away from zero, so
/// `10.125` prints as `$10.13`. Everything else rounds to the nearest cent
/// of its exact binary value, which keeps `2.675` at `$2.67`.
#[must_use]
pub fn format_price(price: f64) -> String {
    let cents = price * 100.0;
    // The product is exact only when the fused remainder is zero
    let exact_tie = cents.fract().abs() == 0.5 && price.mul_add(100.0, -cents) == 0.0;
    if exact_tie {
        let rounded = if cents.is_sign_negative() {
            cents.floor()
        } else {
            cents.ceil()
        };
        return format!("${:.2}", rounded / 100.0);
    }
    format!("${price:.2}")
}
