//! HTTP implementation of `CatalogClient`
//!
//! Issues a single `GET` to the configured endpoint, no query parameters.

use crate::client::CatalogClient;
use crate::error::FetchError;
use crate::types::ProductRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Catalog client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogClient {
    /// Create a client for `endpoint`
    ///
    /// `timeout` of `None` means the request may wait indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this client fetches from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, FetchError> {
        log::debug!("GET {}", self.endpoint);

        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let products: Vec<ProductRecord> = serde_json::from_slice(&body)?;

        log::debug!("Fetched {} products from {}", products.len(), self.endpoint);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/products", addr)
    }

    fn listing_json(count: u64) -> String {
        let items: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{"id":{i},"title":"Item {i}","price":{i}.5,"category":"misc","image":"https://img/{i}.png"}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[tokio::test]
    async fn test_fetch_products_success_keeps_order() {
        let endpoint = serve_once("200 OK", listing_json(10)).await;
        let client = HttpCatalogClient::new(endpoint, None).unwrap();

        let products = client.fetch_products().await.unwrap();
        assert_eq!(products.len(), 10);
        let ids: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        let expected: Vec<ProductId> = (1..=10).map(ProductId::Number).collect();
        assert_eq!(ids, expected);
        assert_eq!(products[2].title, "Item 3");
    }

    #[tokio::test]
    async fn test_fetch_products_server_error() {
        let endpoint = serve_once("500 Internal Server Error", String::new()).await;
        let client = HttpCatalogClient::new(endpoint, None).unwrap();

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_fetch_products_malformed_body() {
        let endpoint = serve_once("200 OK", r#"{"not":"a list"}"#.to_string()).await;
        let client = HttpCatalogClient::new(endpoint, None).unwrap();

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_products_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpCatalogClient::new(format!("http://{}/products", addr), Some(Duration::from_secs(2)))
                .unwrap();

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[test]
    fn test_endpoint_accessor() {
        let client = HttpCatalogClient::new(crate::DEFAULT_ENDPOINT, None).unwrap();
        assert_eq!(client.endpoint(), crate::DEFAULT_ENDPOINT);
    }
}
