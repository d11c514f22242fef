//! Configuration and file management for catalog-browser
//!
//! This crate provides:
//! - Config and cache directory paths
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)
//! - Environment overrides (`.env` via dotenvy)

pub mod app_config;
pub mod config_file;
pub mod env;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use env::{endpoint_override, ENDPOINT_ENV_VAR};
pub use paths::{app_config_path, cache_dir, config_dir};
