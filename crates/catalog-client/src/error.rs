//! Fetch failure taxonomy
//!
//! There is exactly one failure category at the catalog boundary: the fetch
//! failed. The variants only tell the log reader why.

use thiserror::Error;

/// Error returned when the product list could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body is not a list of products
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(FetchError::Status(500).to_string(), "unexpected HTTP status 500");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let fetch_error: FetchError = err.into();
        assert!(matches!(fetch_error, FetchError::Decode(_)));
        assert!(fetch_error.to_string().starts_with("malformed response body"));
    }
}
