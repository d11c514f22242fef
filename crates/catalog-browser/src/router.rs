//! Routes
//!
//! Two logical locations plus a catch-all:
//! - `/` - product list
//! - `/product/:productId` - product detail
//! - anything else - not found

use catalog_client::ProductId;

/// Logical location of the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    ProductList,
    ProductDetail(ProductId),
    /// Unmatched path, kept for display
    NotFound(String),
}

impl Route {
    /// Match a path against the known routes
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        if normalized == "/" {
            return Self::ProductList;
        }

        if let Some(id) = normalized.strip_prefix("/product/") {
            if !id.is_empty() && !id.contains('/') {
                return Self::ProductDetail(ProductId::parse(id));
            }
        }

        Self::NotFound(path.to_string())
    }

    /// Path of this route
    pub fn path(&self) -> String {
        match self {
            Self::ProductList => "/".to_string(),
            Self::ProductDetail(id) => format!("/product/{}", id),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn is_product_list(&self) -> bool {
        matches!(self, Self::ProductList)
    }
}
