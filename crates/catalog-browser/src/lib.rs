//! Terminal product catalog browser
//!
//! Redux-style architecture:
//!
//! ```text
//! key event ──► Store::dispatch ──► middleware chain ──► reducer ──► subscribers
//!                   ▲                    │
//!                   │                    ▼ (spawned fetch)
//!                   └──── Dispatcher ◄── CatalogClient
//! ```
//!
//! Middleware may consume an action or queue follow-ups on the
//! [`dispatcher::Dispatcher`]. Queued actions are drained by the store on the
//! main thread, so state is only ever touched there.

pub mod actions;
pub mod dispatcher;
pub mod logger;
pub mod middleware;
pub mod reducer;
pub mod reducers;
pub mod router;
pub mod state;
pub mod store;
pub mod theme;
pub mod view_models;
pub mod views;
