//! Product catalog API client
//!
//! This crate provides a trait-based client for the remote product listing
//! endpoint. The browser only depends on the `CatalogClient` trait, so tests
//! and alternative transports can stand in for the HTTP implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │       CatalogClient trait        │
//! │  - fetch_products()              │
//! └──────────────────────────────────┘
//!                  │
//!                  ▼
//!        ┌───────────────────┐
//!        │ HttpCatalogClient │
//!        │ (reqwest, GET)    │
//!        └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_client::{CatalogClient, HttpCatalogClient, DEFAULT_ENDPOINT};
//!
//! # async fn example() -> Result<(), catalog_client::FetchError> {
//! let client = HttpCatalogClient::new(DEFAULT_ENDPOINT, None)?;
//! let products = client.fetch_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

/// Default product listing endpoint
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

pub use client::CatalogClient;
pub use error::FetchError;
pub use http_client::HttpCatalogClient;
pub use types::{ProductId, ProductRecord, Rating};
