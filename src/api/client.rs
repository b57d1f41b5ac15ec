//! The data access seam consumed by the view controllers.

use async_trait::async_trait;

use super::models::{Category, CategoryName, Product};

/// Asynchronous catalog queries.
///
/// Every method resolves to `None` on any transport, status or decoding
/// failure. Implementations log the cause; callers only ever see
/// `Some(data)` or `None`, and render the same placeholder for a failure as
/// for an empty result.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Single product by id.
    async fn get_product_by_id(&self, id: &str) -> Option<Product>;

    /// The handful of products shown on the frontpage.
    async fn get_frontpage_products(&self) -> Option<Vec<Product>>;

    /// Up to `limit` products in `category_id`.
    async fn get_products_by_category(&self, category_id: &str, limit: u32)
        -> Option<Vec<Product>>;

    /// All categories.
    async fn get_categories(&self) -> Option<Vec<Category>>;

    /// Display name of a category.
    async fn get_category_name(&self, category_id: &str) -> Option<CategoryName>;

    /// Full-text product search, optionally scoped to one category.
    async fn search_products(&self, query: &str, category_id: Option<&str>)
        -> Option<Vec<Product>>;
}
