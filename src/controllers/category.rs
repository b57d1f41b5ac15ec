//! Category listing with a search form scoped to the category.

use crate::router::ViewContext;
use crate::view::{builders, Marker};

use super::{populate, set_category_heading, Placeholder, RenderOutcome};

pub async fn render(ctx: &ViewContext, category_id: &str) -> RenderOutcome {
    let Some(heading) = ctx.attach(Marker::Heading, builders::heading("")) else {
        return RenderOutcome::Stale;
    };
    if ctx
        .mount_search_form(Some(category_id.to_string()), "")
        .is_none()
    {
        return RenderOutcome::Stale;
    }
    let Some(list) = ctx.attach(Marker::ProductList, builders::list("products")) else {
        return RenderOutcome::Stale;
    };

    let name = ctx.api().get_category_name(category_id).await;
    if !ctx.is_current() {
        return RenderOutcome::Stale;
    }
    set_category_heading(ctx, heading, name);

    populate(
        ctx,
        list,
        ctx.api()
            .get_products_by_category(category_id, ctx.limits().category_limit),
        builders::product_card,
        &Placeholder::same("No products in this category."),
    )
    .await
}
