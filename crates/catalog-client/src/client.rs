//! Catalog client trait

use crate::error::FetchError;
use crate::types::ProductRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Product catalog client
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// with the async tasks that perform fetches.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_client::{CatalogClient, ProductRecord};
///
/// async fn count(client: &dyn CatalogClient) -> usize {
///     client.fetch_products().await.map(|p| p.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full product listing, in response order
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError>;
}

#[async_trait]
impl<T: CatalogClient + ?Sized> CatalogClient for Arc<T> {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
        (**self).fetch_products().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock client for testing
    #[derive(Debug, Default)]
    struct MockClient {
        products: Vec<ProductRecord>,
        call_count: Mutex<usize>,
    }

    #[async_trait]
    impl CatalogClient for MockClient {
        async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
            *self.call_count.lock().unwrap() += 1;
            Ok(self.products.clone())
        }
    }

    #[tokio::test]
    async fn test_arc_delegates_to_inner_client() {
        let mock = Arc::new(MockClient {
            products: vec![ProductRecord::new(1, "Shirt", 9.99, "clothing", "a.png")],
            ..Default::default()
        });
        let shared: Arc<dyn CatalogClient> = mock.clone();

        let products = shared.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(*mock.call_count.lock().unwrap(), 1);
    }
}
