//! Fetch lifecycle actions
//!
//! These only drive the loading indicator. Successful results arrive as
//! `ProductAction::SetProducts`; failures never touch the product state.

/// Fetch lifecycle of the product listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    /// A fetch was started for the list view
    FetchStarted,
    /// The fetch failed (reason for display)
    FetchFailed(String),
    /// The list view went away while a fetch was in flight
    FetchCancelled,
}
