//! Fetch status of the product listing

/// Distinguishes "still loading", "loaded" and "failed", which an empty
/// product list alone cannot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed (reason)
    Failed(String),
}
