//! Catalog Status Reducer
//!
//! Tracks the fetch lifecycle next to, not inside, the product state.

use crate::actions::{Action, CatalogAction, ProductAction};
use crate::state::CatalogStatus;

/// Reduce the fetch status
pub fn reduce(state: CatalogStatus, action: &Action) -> CatalogStatus {
    match action {
        Action::Catalog(CatalogAction::FetchStarted) => CatalogStatus::Loading,
        Action::Catalog(CatalogAction::FetchFailed(reason)) => {
            log::debug!("Catalog status: failed ({})", reason);
            CatalogStatus::Failed(reason.clone())
        }
        Action::Catalog(CatalogAction::FetchCancelled) => match state {
            CatalogStatus::Loading => CatalogStatus::Idle,
            other => other,
        },
        Action::Product(ProductAction::SetProducts(_)) => CatalogStatus::Loaded,
        _ => state,
    }
}
