//! Product detail followed by related products from the same category.

use tracing::debug;

use crate::router::{LoadingIndicator, ViewContext};
use crate::view::{builders, Marker, ViewNode};

use super::{populate, Placeholder, RenderOutcome};

/// Renders the detail block, then fetches related products once the
/// product's category is known. Returns how the related list was filled,
/// or `Failed` when the product itself could not be fetched.
pub async fn render(ctx: &ViewContext, product_id: &str) -> RenderOutcome {
    let block = ViewNode::new("main").class("detail-block");
    let Some(block) = ctx.attach(Marker::DetailBlock, block) else {
        return RenderOutcome::Stale;
    };

    let product = {
        let _loading = LoadingIndicator::new(ctx.clone(), None).activate();
        ctx.api().get_product_by_id(product_id).await
    };

    let Some(product) = product else {
        if !ctx.is_current() {
            return RenderOutcome::Stale;
        }
        ctx.append_child(block, builders::placeholder("No product found."));
        return RenderOutcome::Failed;
    };

    if !ctx.append_child(block, builders::product_detail(&product)) {
        return if ctx.is_current() {
            RenderOutcome::Detached
        } else {
            RenderOutcome::Stale
        };
    }

    let heading = ctx.attach(
        Marker::RelatedHeading,
        builders::heading(format!("More from {}", product.category_title)).class("heading2"),
    );
    let related = ctx.attach(Marker::RelatedList, builders::list("related"));
    let (Some(_), Some(related)) = (heading, related) else {
        return RenderOutcome::Stale;
    };

    debug!(product = %product.id, category = %product.category_id, "Fetching related products");
    populate(
        ctx,
        related,
        ctx.api()
            .get_products_by_category(&product.category_id, ctx.limits().related_limit),
        builders::product_card,
        &Placeholder::same("No related products."),
    )
    .await
}
