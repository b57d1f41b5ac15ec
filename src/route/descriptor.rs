//! Route descriptors and their URL form.

use url::form_urlencoded;

use crate::api::Id;

/// Typed view of a location's query parameters.
///
/// Built fresh for every navigation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// `id`: selects the product detail view.
    pub product_id: Option<Id>,
    /// `search`: free-text query.
    pub search_query: Option<String>,
    /// `category`: category id.
    pub category_id: Option<Id>,
    /// `categories`: presence-only flag for the category index.
    pub show_all_categories: bool,
}

impl RouteDescriptor {
    pub fn product(id: impl Into<Id>) -> Self {
        Self {
            product_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn category(id: impl Into<Id>) -> Self {
        Self {
            category_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// What a search submission navigates to.
    pub fn search(category_id: Option<Id>, query: impl Into<String>) -> Self {
        Self {
            category_id,
            search_query: Some(query.into()),
            ..Self::default()
        }
    }

    /// What "view all categories" navigates to.
    pub fn all_categories() -> Self {
        Self {
            show_all_categories: true,
            ..Self::default()
        }
    }

    /// Parses a location (`/?id=4`, `?id=4`, `id=4` or a full URL).
    ///
    /// Total: unknown parameters are ignored, empty values count as absent,
    /// and when a parameter repeats the first occurrence wins.
    pub fn parse(location: &str) -> Self {
        let query = query_part(location);
        let mut descriptor = Self::default();

        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "id" => set_once(&mut descriptor.product_id, value.into_owned()),
                "search" => set_once(&mut descriptor.search_query, value.into_owned()),
                "category" => set_once(&mut descriptor.category_id, value.into_owned()),
                "categories" => descriptor.show_all_categories = true,
                _ => {}
            }
        }

        descriptor
    }

    /// Canonical location for this descriptor.
    ///
    /// Search routes always carry both parameters
    /// (`/?category=<id-or-empty>&search=<query>`); the category index is
    /// `/?categories=1`; an empty descriptor is `/`. Parsing the result
    /// yields an equal descriptor for every route a user action produces.
    pub fn to_location(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(id) = &self.product_id {
            query.append_pair("id", id);
        }
        if let Some(search) = &self.search_query {
            query.append_pair("category", self.category_id.as_deref().unwrap_or(""));
            query.append_pair("search", search);
        } else if let Some(category) = &self.category_id {
            query.append_pair("category", category);
        }
        if self.show_all_categories {
            query.append_pair("categories", "1");
        }

        let query = query.finish();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query)
        }
    }
}

fn set_once(slot: &mut Option<String>, value: String) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value);
    }
}

/// The query string of `location`, without `?` and any `#fragment`.
fn query_part(location: &str) -> &str {
    let without_fragment = location.split('#').next().unwrap_or("");
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}
