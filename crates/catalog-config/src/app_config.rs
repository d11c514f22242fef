//! Application configuration
//!
//! Configuration loaded from `.catalog-browser.toml`.

use serde::Deserialize;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Product listing endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    catalog_client::DEFAULT_ENDPOINT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            fetch_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load config from file (see `load_config_file`), or use defaults,
    /// then apply the `CATALOG_ENDPOINT` override
    pub fn load() -> Self {
        Self::load_from_file().with_endpoint_override(crate::endpoint_override())
    }

    fn load_from_file() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Replace the endpoint when an override is given
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            log::info!("Endpoint overridden to {}", endpoint);
            self.endpoint = endpoint;
        }
        self
    }

    /// Fetch timeout as a `Duration`
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "https://fakestoreapi.com/products");
        assert!(config.fetch_timeout().is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            endpoint = "http://localhost:8080/products"
            fetch_timeout_secs = 5
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::parse("fetch_timeout_secs = 1").unwrap();
        assert_eq!(config.endpoint, catalog_client::DEFAULT_ENDPOINT);
        assert_eq!(config.fetch_timeout_secs, Some(1));
    }

    #[test]
    fn test_config_rejects_wrong_type() {
        assert!(AppConfig::parse("fetch_timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_endpoint_override() {
        let config = AppConfig::default().with_endpoint_override(Some("http://x/p".to_string()));
        assert_eq!(config.endpoint, "http://x/p");

        let config = AppConfig::default().with_endpoint_override(None);
        assert_eq!(config.endpoint, catalog_client::DEFAULT_ENDPOINT);
    }
}
