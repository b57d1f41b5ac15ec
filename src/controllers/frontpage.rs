//! Frontpage: newest products, the "view all categories" button and the
//! category list.

use crate::router::ViewContext;
use crate::view::{builders, Marker};

use super::{populate, Placeholder, RenderOutcome};

/// Renders the frontpage. Returns how the product list was filled.
pub async fn render(ctx: &ViewContext) -> RenderOutcome {
    let chrome = (
        ctx.attach(Marker::Heading, builders::heading("New products")),
        ctx.attach(Marker::ProductList, builders::list("products")),
        ctx.attach(Marker::CategoriesButton, builders::categories_button()),
        ctx.attach(
            Marker::CategoriesHeading,
            builders::heading("Browse our categories").class("heading2"),
        ),
        ctx.attach(Marker::CategoryList, builders::list("categories")),
    );
    let (Some(_), Some(products), Some(_), Some(_), Some(categories)) = chrome else {
        return RenderOutcome::Stale;
    };

    let outcome = populate(
        ctx,
        products,
        ctx.api().get_frontpage_products(),
        builders::product_card,
        &Placeholder::same("No products found."),
    )
    .await;
    if outcome == RenderOutcome::Stale {
        return outcome;
    }

    populate(
        ctx,
        categories,
        ctx.api().get_categories(),
        builders::category_card,
        &Placeholder::same("No categories found."),
    )
    .await;

    outcome
}
