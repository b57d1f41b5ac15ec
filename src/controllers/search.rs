//! Search results within a category.

use crate::api::Product;
use crate::router::{LoadingIndicator, ViewContext};
use crate::view::{builders, Marker, ViewNode};

use super::{place, set_category_heading, Placeholder, RenderOutcome};

pub async fn render(ctx: &ViewContext, category_id: &str, query: &str) -> RenderOutcome {
    let Some(heading) = ctx.attach(Marker::Heading, builders::heading("")) else {
        return RenderOutcome::Stale;
    };
    let Some(form) = ctx.mount_search_form(Some(category_id.to_string()), query) else {
        return RenderOutcome::Stale;
    };

    let name = ctx.api().get_category_name(category_id).await;
    if !ctx.is_current() {
        return RenderOutcome::Stale;
    }
    set_category_heading(ctx, heading, name);

    let results = {
        let _loading = LoadingIndicator::new(ctx.clone(), Some(form)).activate();
        ctx.api().search_products(query, Some(category_id)).await
    };
    render_results(ctx, query, results)
}

/// Replaces the results fragment with `results`.
///
/// Only the results fragment is touched; the heading and form stay, so
/// repeated searches never stack result sets.
pub fn render_results(
    ctx: &ViewContext,
    query: &str,
    results: Option<Vec<Product>>,
) -> RenderOutcome {
    if !ctx.is_current() {
        return RenderOutcome::Stale;
    }
    ctx.detach(Marker::Results);

    let container = builders::list("results").child(
        ViewNode::new("h2")
            .class("results-title")
            .text(format!("Search results for \"{query}\"")),
    );
    let Some(container) = ctx.attach(Marker::Results, container) else {
        return RenderOutcome::Stale;
    };

    place(
        ctx,
        container,
        results,
        builders::product_card,
        &Placeholder {
            empty: format!("No results for {query}"),
            failed: format!("Search for {query} failed"),
        },
    )
}
