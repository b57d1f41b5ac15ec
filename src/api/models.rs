//! Normalized catalog records and their wire-format counterparts.
//!
//! The remote API is loose about types: ids and prices come back as either
//! numbers or strings, the product id may be named `key`, and any field may
//! be missing. Everything is normalized here so the rest of the crate only
//! ever sees plain strings.

use serde::Deserialize;
use serde_json::Value;

/// Opaque record identifier, kept exactly as it appears in URLs.
pub type Id = String;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub id: Id,
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category_id: Id,
    pub category_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    pub id: Id,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryName {
    pub name: String,
}

/// Product as sent by the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawProduct {
    key: Option<Value>,
    id: Option<Value>,
    title: Option<Value>,
    price: Option<Value>,
    description: Option<Value>,
    image: Option<Value>,
    category_id: Option<Value>,
    category_title: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCategory {
    id: Option<Value>,
    title: Option<Value>,
}

/// List envelope used by every collection endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: text(raw.key.or(raw.id)),
            title: text(raw.title),
            price: text(raw.price),
            description: text(raw.description),
            image: text(raw.image),
            category_id: text(raw.category_id),
            category_title: text(raw.category_title),
        }
    }
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            id: text(raw.id),
            title: text(raw.title),
        }
    }
}

impl From<RawCategory> for CategoryName {
    fn from(raw: RawCategory) -> Self {
        Self {
            name: text(raw.title),
        }
    }
}

/// Flattens a scalar JSON value to its display string. Null, missing and
/// structured values become the empty string.
fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
