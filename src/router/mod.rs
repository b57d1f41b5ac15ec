//! View dispatcher.
//!
//! [`Router::route`] reads the current history entry, selects exactly one
//! view, removes every fragment of every view, then runs that view's
//! controller. Each run starts a new generation; controllers from earlier
//! runs that resolve late find their context stale and attach nothing.

mod context;
mod loading;
mod registry;
mod search;

pub use context::ViewContext;
pub use loading::{LoadingGuard, LoadingIndicator};
pub use registry::FragmentRegistry;
pub use search::{SearchForm, SearchIntent, SearchReducer, SearchState, SubmitOutcome};

use std::sync::{Arc, Weak};

use tracing::{debug, info};

use crate::api::CatalogApi;
use crate::config::CatalogConfig;
use crate::controllers::{self, RenderOutcome};
use crate::history::NavigationHistory;
use crate::route::{RouteDescriptor, View, ViewKind};
use crate::view::{FragmentHandle, Marker, PresentationRoot};

use context::Stage;

struct Shared {
    stage: Arc<Stage>,
    history: NavigationHistory,
}

/// The core state machine. Cheap to clone; clones drive the same root.
#[derive(Clone)]
pub struct Router {
    shared: Arc<Shared>,
}

impl Router {
    /// Creates a router and registers it as `history`'s traversal handler,
    /// so back/forward re-route with the restored location.
    pub fn new(
        api: Arc<dyn CatalogApi>,
        root: PresentationRoot,
        history: NavigationHistory,
        limits: CatalogConfig,
    ) -> Self {
        let shared = Arc::new(Shared {
            stage: Arc::new(Stage::new(api, root, limits)),
            history: history.clone(),
        });

        let weak: Weak<Shared> = Arc::downgrade(&shared);
        history.on_history_traversal(move || {
            let weak = weak.clone();
            Box::pin(async move {
                if let Some(shared) = weak.upgrade() {
                    Router { shared }.route().await;
                }
            })
        });

        Self { shared }
    }

    pub fn root(&self) -> &PresentationRoot {
        &self.shared.stage.root
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.shared.history
    }

    /// Generation of the latest navigation.
    pub fn generation(&self) -> u64 {
        self.shared.stage.generation()
    }

    /// Fragments currently registered to `view`.
    pub fn fragments(&self, view: ViewKind) -> Vec<FragmentHandle> {
        self.shared.stage.registry.lock().handles(view)
    }

    /// Renders the view for the current history entry.
    pub async fn route(&self) {
        let location = self.shared.history.location();
        let view = View::select(&RouteDescriptor::parse(&location));

        let (generation, removed) = self.shared.stage.teardown();
        info!(
            location = %location,
            view = %view.kind(),
            generation,
            removed,
            "Routing"
        );

        let ctx = ViewContext::new(self.shared.stage.clone(), generation, view.kind());
        let outcome = match &view {
            View::ProductDetail { product_id } => controllers::detail::render(&ctx, product_id).await,
            View::CategoryWithSearch { category_id, query } => {
                controllers::search::render(&ctx, category_id, query).await
            }
            View::CategoryOnly { category_id } => {
                controllers::category::render(&ctx, category_id).await
            }
            View::AllCategories => controllers::categories::render(&ctx).await,
            View::Frontpage => controllers::frontpage::render(&ctx).await,
        };
        debug!(view = %view.kind(), generation, outcome = ?outcome, "View settled");
    }

    /// Pushes a location typed by the user, then routes it.
    pub async fn navigate(&self, location: &str) {
        self.shared.history.push_location(location);
        self.route().await;
    }

    /// The search form of the current view, if it mounted one.
    pub fn search_form(&self) -> Option<SearchForm> {
        let mounted = self.shared.stage.form.lock().clone()?;
        if mounted.generation != self.generation() || !self.root().contains(mounted.handle) {
            return None;
        }
        let ctx = ViewContext::new(self.shared.stage.clone(), mounted.generation, mounted.view);
        Some(SearchForm::new(
            ctx,
            mounted.handle,
            mounted.category_id,
            mounted.state,
        ))
    }

    /// Submits `form` with whatever is in its search box.
    ///
    /// Renders the results in place, pushes the canonical search location
    /// and re-routes. A submission while the form already has a search in
    /// flight is ignored; the in-flight search is not cancelled.
    pub async fn submit_search(&self, form: &SearchForm) -> SubmitOutcome {
        let query = form.value();
        if query.is_empty() {
            return SubmitOutcome::Empty;
        }
        if !form.is_live() {
            debug!(query = %query, "Submission from a detached form");
            return SubmitOutcome::Stale;
        }
        if form.is_disabled() || form.state().is_loading() {
            debug!(query = %query, "Search already in flight, ignoring submission");
            return SubmitOutcome::Ignored;
        }

        form.dispatch(SearchIntent::Submit {
            query: query.clone(),
        });
        let ctx = form.context();
        info!(query = %query, category = ?form.category_id(), "Search submitted");

        let results = {
            let _loading = LoadingIndicator::new(ctx.clone(), Some(form.clone())).activate();
            ctx.api().search_products(&query, form.category_id()).await
        };

        if !ctx.is_current() {
            form.dispatch(SearchIntent::Discarded);
            debug!(query = %query, generation = ctx.generation(), "Discarding stale search");
            return SubmitOutcome::Stale;
        }

        let outcome = controllers::search::render_results(ctx, &query, results);
        match outcome {
            RenderOutcome::Rendered(count) => form.dispatch(SearchIntent::Resolved { count }),
            RenderOutcome::Empty => form.dispatch(SearchIntent::Resolved { count: 0 }),
            RenderOutcome::Failed | RenderOutcome::Stale | RenderOutcome::Detached => {
                form.dispatch(SearchIntent::Failed)
            }
        };

        let category_id = form.category_id().map(str::to_string);
        self.shared
            .history
            .push_canonical_url(&RouteDescriptor::search(category_id, query));
        self.route().await;
        SubmitOutcome::Completed(outcome)
    }

    /// Clicks "view all categories". Returns `false` when the current view
    /// has no such button.
    pub async fn show_all_categories(&self) -> bool {
        if self.root().count(Marker::CategoriesButton) == 0 {
            return false;
        }
        self.shared
            .history
            .push_canonical_url(&RouteDescriptor::all_categories());
        self.route().await;
        true
    }
}
