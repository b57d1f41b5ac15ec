//! `CatalogApi` over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::client::CatalogApi;
use super::error::ApiError;
use super::models::{Category, CategoryName, ItemList, Product, RawCategory, RawProduct};
use crate::config::{ApiConfig, CatalogConfig};

/// Catalog client for the remote product API.
///
/// Collections are requested with `mode=list`. Failures are logged at `warn`
/// and collapsed to `None`.
pub struct HttpCatalogApi {
    client: Client,
    base: Url,
    limits: CatalogConfig,
}

impl HttpCatalogApi {
    pub fn new(api: &ApiConfig, limits: CatalogConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&api.base_url).map_err(|e| ApiError::InvalidBase {
            url: api.base_url.clone(),
            source: e,
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::CannotBeABase {
                url: api.base_url.clone(),
            });
        }

        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(api.connect_timeout_seconds));
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base,
            limits,
        })
    }

    /// Base URL with `segments` appended as escaped path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::CannotBeABase {
                url: self.base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(segments)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        let url_str = url.to_string();

        tracing::debug!(url = %url_str, "Catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url_str,
            source: e,
        })
    }

    /// Runs a request and collapses any failure to `None`.
    async fn query<T: DeserializeOwned + Send>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Option<T> {
        match self.get_json(segments, params).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Catalog request failed");
                None
            }
        }
    }

    async fn product_list(&self, params: &[(&str, &str)]) -> Option<Vec<Product>> {
        let list: ItemList<RawProduct> = self.query(&["products"], params).await?;
        Some(list.items.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn get_product_by_id(&self, id: &str) -> Option<Product> {
        let raw: RawProduct = self.query(&["products", id], &[]).await?;
        Some(Product::from(raw))
    }

    async fn get_frontpage_products(&self) -> Option<Vec<Product>> {
        let limit = self.limits.frontpage_limit.to_string();
        self.product_list(&[("limit", limit.as_str()), ("mode", "list")])
            .await
    }

    async fn get_products_by_category(
        &self,
        category_id: &str,
        limit: u32,
    ) -> Option<Vec<Product>> {
        let limit = limit.to_string();
        self.product_list(&[("limit", limit.as_str()), ("category", category_id), ("mode", "list")])
            .await
    }

    async fn get_categories(&self) -> Option<Vec<Category>> {
        let limit = self.limits.categories_limit.to_string();
        let list: ItemList<RawCategory> = self
            .query(&["categories"], &[("limit", limit.as_str()), ("mode", "list")])
            .await?;
        Some(list.items.into_iter().map(Category::from).collect())
    }

    async fn get_category_name(&self, category_id: &str) -> Option<CategoryName> {
        let raw: RawCategory = self.query(&["categories", category_id], &[]).await?;
        Some(CategoryName::from(raw))
    }

    async fn search_products(
        &self,
        query: &str,
        category_id: Option<&str>,
    ) -> Option<Vec<Product>> {
        let mut params = vec![("search", query), ("mode", "list")];
        if let Some(category) = category_id {
            params.push(("category", category));
        }
        self.product_list(&params).await
    }
}
