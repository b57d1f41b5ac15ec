use thiserror::Error;

/// Why a catalog request produced no data.
///
/// Only used for logging inside [`super::HttpCatalogApi`]; request failures
/// never cross the [`super::CatalogApi`] boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBase {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{url}' cannot carry path segments")]
    CannotBeABase { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short machine-readable tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBase { .. } => "invalid_base",
            ApiError::CannotBeABase { .. } => "cannot_be_a_base",
            ApiError::Client(_) => "client",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
