//! View selection.

use std::fmt;

use crate::api::Id;

use super::descriptor::RouteDescriptor;

/// The five mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKind {
    ProductDetail,
    CategoryWithSearch,
    CategoryOnly,
    AllCategories,
    Frontpage,
}

impl ViewKind {
    /// In precedence order.
    pub const ALL: [ViewKind; 5] = [
        ViewKind::ProductDetail,
        ViewKind::CategoryWithSearch,
        ViewKind::CategoryOnly,
        ViewKind::AllCategories,
        ViewKind::Frontpage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::ProductDetail => "product-detail",
            ViewKind::CategoryWithSearch => "category-search",
            ViewKind::CategoryOnly => "category",
            ViewKind::AllCategories => "all-categories",
            ViewKind::Frontpage => "frontpage",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selected view together with the descriptor fields it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    ProductDetail { product_id: Id },
    CategoryWithSearch { category_id: Id, query: String },
    CategoryOnly { category_id: Id },
    AllCategories,
    Frontpage,
}

impl View {
    /// Picks exactly one view, by the fixed precedence
    /// `ProductDetail > CategoryWithSearch > CategoryOnly > AllCategories > Frontpage`.
    ///
    /// A search query without a category does not select a view of its own
    /// and falls through to the lower-precedence checks.
    pub fn select(route: &RouteDescriptor) -> Self {
        if let Some(product_id) = &route.product_id {
            return View::ProductDetail {
                product_id: product_id.clone(),
            };
        }

        match (&route.category_id, &route.search_query) {
            (Some(category_id), Some(query)) => View::CategoryWithSearch {
                category_id: category_id.clone(),
                query: query.clone(),
            },
            (Some(category_id), None) => View::CategoryOnly {
                category_id: category_id.clone(),
            },
            (None, _) if route.show_all_categories => View::AllCategories,
            (None, _) => View::Frontpage,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::ProductDetail { .. } => ViewKind::ProductDetail,
            View::CategoryWithSearch { .. } => ViewKind::CategoryWithSearch,
            View::CategoryOnly { .. } => ViewKind::CategoryOnly,
            View::AllCategories => ViewKind::AllCategories,
            View::Frontpage => ViewKind::Frontpage,
        }
    }
}
