//! Configuration loading for the storefront.
//!
//! The file lives at `~/.config/storefront/config.toml`. Every section is
//! optional; missing fields fall back to the defaults in [`types`].

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CatalogConfig, Config, ShellConfig};
