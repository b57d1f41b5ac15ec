//! View controllers.
//!
//! Each controller builds its static chrome synchronously, then fetches and
//! fills it in. Lists all go through [`populate`]: fetch, then either one
//! placeholder or one built child per item, appended in the order the
//! catalog returned them.

pub mod categories;
pub mod category;
pub mod detail;
pub mod frontpage;
pub mod search;

use std::future::Future;

use tracing::debug;

use crate::api::CategoryName;
use crate::router::ViewContext;
use crate::view::{builders, FragmentHandle, ViewNode};

/// How a list fragment was filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// This many items were appended.
    Rendered(usize),
    /// The catalog returned no items; the placeholder was shown.
    Empty,
    /// The fetch failed; the placeholder was shown.
    Failed,
    /// A newer navigation started; nothing was attached.
    Stale,
    /// The container fragment was gone; the step was skipped.
    Detached,
}

/// Messages for the two "nothing to show" cases. Both render as the same
/// placeholder node.
#[derive(Clone, Debug)]
pub struct Placeholder {
    pub empty: String,
    pub failed: String,
}

impl Placeholder {
    pub fn same(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            empty: message.clone(),
            failed: message,
        }
    }
}

/// Fetches a list and renders it into `container`.
pub async fn populate<T, F>(
    ctx: &ViewContext,
    container: FragmentHandle,
    fetch: F,
    build: fn(&T) -> ViewNode,
    placeholder: &Placeholder,
) -> RenderOutcome
where
    F: Future<Output = Option<Vec<T>>>,
{
    let items = fetch.await;
    place(ctx, container, items, build, placeholder)
}

/// Renders an already fetched list into `container`.
pub fn place<T>(
    ctx: &ViewContext,
    container: FragmentHandle,
    items: Option<Vec<T>>,
    build: fn(&T) -> ViewNode,
    placeholder: &Placeholder,
) -> RenderOutcome {
    if !ctx.is_current() {
        debug!(view = %ctx.view(), generation = ctx.generation(), "Dropping stale result");
        return RenderOutcome::Stale;
    }

    let (children, outcome) = match items {
        None => (
            vec![builders::placeholder(placeholder.failed.as_str())],
            RenderOutcome::Failed,
        ),
        Some(items) if items.is_empty() => (
            vec![builders::placeholder(placeholder.empty.as_str())],
            RenderOutcome::Empty,
        ),
        Some(items) => {
            let count = items.len();
            (items.iter().map(build).collect(), RenderOutcome::Rendered(count))
        }
    };

    for child in children {
        if !ctx.append_child(container, child) {
            return if ctx.is_current() {
                RenderOutcome::Detached
            } else {
                RenderOutcome::Stale
            };
        }
    }
    outcome
}

/// Fills a category heading, falling back when the name is unavailable.
pub(crate) fn set_category_heading(
    ctx: &ViewContext,
    heading: FragmentHandle,
    name: Option<CategoryName>,
) {
    let text = name
        .map(|name| name.name)
        .unwrap_or_else(|| "Unknown category".to_string());
    ctx.update(heading, |node| node.text = Some(text));
}
