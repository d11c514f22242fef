//! Environment overrides
//!
//! A `.env` file in the working directory is loaded before the environment
//! is read, so overrides can live next to the binary during development.

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "CATALOG_ENDPOINT";

/// Load `.env` (if present) and return the endpoint override, if set
pub fn endpoint_override() -> Option<String> {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, relying on environment variables"),
    }

    std::env::var(ENDPOINT_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
}
