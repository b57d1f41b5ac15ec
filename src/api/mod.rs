//! Data access for the remote product catalog.
//!
//! [`CatalogApi`] is the only thing the router and controllers depend on.
//! [`HttpCatalogApi`] is the production implementation; tests substitute
//! scripted fakes.

mod client;
mod error;
mod http;
mod models;

pub use client::CatalogApi;
pub use error::ApiError;
pub use http::HttpCatalogApi;
pub use models::{Category, CategoryName, Id, Product};
