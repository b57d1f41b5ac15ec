//! Category index.

use crate::router::ViewContext;
use crate::view::{builders, Marker};

use super::{populate, Placeholder, RenderOutcome};

pub async fn render(ctx: &ViewContext) -> RenderOutcome {
    let heading = ctx.attach(
        Marker::CategoriesHeading,
        builders::heading("Browse our categories").class("heading2"),
    );
    let list = ctx.attach(Marker::CategoryList, builders::list("categories"));
    let (Some(_), Some(list)) = (heading, list) else {
        return RenderOutcome::Stale;
    };

    populate(
        ctx,
        list,
        ctx.api().get_categories(),
        builders::category_card,
        &Placeholder::same("No categories found."),
    )
    .await
}
