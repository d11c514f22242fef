//! Product catalog data transfer objects
//!
//! These types mirror the JSON returned by the product listing endpoint.
//! Unknown fields are ignored so the API can grow without breaking us.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product
///
/// The API uses integers, but string ids are accepted as well.
/// Equality is structural; use [`ProductId::matches`] to compare an id that
/// came from a path against one that came from the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Parse an id from a path segment (numeric first, text otherwise)
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Whether both ids print the same, so `Text("3")` matches `Number(3)`
    pub fn matches(&self, other: &ProductId) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A single product from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique identifier within the current list
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Price (currency unspecified)
    pub price: f64,

    /// Category label (e.g., "electronics")
    pub category: String,

    /// Image URL
    pub image: String,

    /// Long description, shown on the detail page
    #[serde(default)]
    pub description: Option<String>,

    /// Customer rating, shown on the detail page
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl ProductRecord {
    /// Create a record with only the listing fields set
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category: category.into(),
            image: image.into(),
            description: None,
            rating: None,
        }
    }
}

/// Aggregated customer rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating (0.0 - 5.0)
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}
