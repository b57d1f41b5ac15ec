use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is joined onto. Must end with `/`
    /// for relative joins to keep the last path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Total request timeout in seconds. Unset by default: a stalled
    /// request keeps its view loading until it resolves.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// How many items each view asks the API for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products on the frontpage (default: 6).
    #[serde(default = "default_frontpage_limit")]
    pub frontpage_limit: u32,
    /// Products on a category listing (default: 12).
    #[serde(default = "default_category_limit")]
    pub category_limit: u32,
    /// Related products under a product detail (default: 3).
    #[serde(default = "default_related_limit")]
    pub related_limit: u32,
    /// Categories in the category index (default: 12).
    #[serde(default = "default_categories_limit")]
    pub categories_limit: u32,
}

/// Interactive shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Location routed on start-up when none is given on the command line.
    #[serde(default = "default_start_location")]
    pub start_location: String,
}

fn default_base_url() -> String {
    "https://vef1-2023-h2-api-791d754dda5b.herokuapp.com/".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_frontpage_limit() -> u32 {
    6
}

fn default_category_limit() -> u32 {
    12
}

fn default_related_limit() -> u32 {
    3
}

fn default_categories_limit() -> u32 {
    12
}

fn default_start_location() -> String {
    "/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            frontpage_limit: default_frontpage_limit(),
            category_limit: default_category_limit(),
            related_limit: default_related_limit(),
            categories_limit: default_categories_limit(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_location: default_start_location(),
        }
    }
}
