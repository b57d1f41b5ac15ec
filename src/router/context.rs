//! The context object handed to every view controller.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::api::{CatalogApi, Id};
use crate::config::CatalogConfig;
use crate::route::ViewKind;
use crate::view::{builders, FragmentHandle, Marker, PresentationRoot, ViewNode};

use super::registry::FragmentRegistry;
use super::search::{SearchForm, SearchState};

/// The search form mounted by the current view, if any.
#[derive(Clone)]
pub(crate) struct MountedForm {
    pub generation: u64,
    pub view: ViewKind,
    pub handle: FragmentHandle,
    pub category_id: Option<Id>,
    pub state: Arc<Mutex<SearchState>>,
}

/// Everything the router and its views render against.
///
/// Lock order is registry first, then the presentation tree.
pub(crate) struct Stage {
    pub api: Arc<dyn CatalogApi>,
    pub root: PresentationRoot,
    pub registry: Mutex<FragmentRegistry>,
    pub form: Mutex<Option<MountedForm>>,
    pub limits: CatalogConfig,
}

impl Stage {
    pub fn new(api: Arc<dyn CatalogApi>, root: PresentationRoot, limits: CatalogConfig) -> Self {
        Self {
            api,
            root,
            registry: Mutex::new(FragmentRegistry::default()),
            form: Mutex::new(None),
            limits,
        }
    }

    /// Removes every registered fragment of every view and starts a new
    /// generation. Returns the new generation and how many fragments went.
    pub fn teardown(&self) -> (u64, usize) {
        let mut registry = self.registry.lock();
        let (generation, handles) = registry.begin_navigation();
        let removed = handles
            .into_iter()
            .filter(|handle| self.root.remove(*handle).is_some())
            .count();
        *self.form.lock() = None;
        (generation, removed)
    }

    pub fn generation(&self) -> u64 {
        self.registry.lock().generation()
    }
}

/// A view controller's window onto the shared root.
///
/// Carries the generation the navigation was issued under. Once a newer
/// navigation starts, every mutation through this context becomes a no-op,
/// so a fetch that resolves late cannot touch the newer view.
#[derive(Clone)]
pub struct ViewContext {
    stage: Arc<Stage>,
    generation: u64,
    view: ViewKind,
}

impl ViewContext {
    pub(crate) fn new(stage: Arc<Stage>, generation: u64, view: ViewKind) -> Self {
        Self {
            stage,
            generation,
            view,
        }
    }

    /// A context over its own private registry, for driving a single
    /// controller against `root` without a router.
    pub fn standalone(
        api: Arc<dyn CatalogApi>,
        root: PresentationRoot,
        limits: CatalogConfig,
        view: ViewKind,
    ) -> Self {
        let stage = Arc::new(Stage::new(api, root, limits));
        Self::new(stage, 0, view)
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no navigation has started since this context was issued.
    pub fn is_current(&self) -> bool {
        self.stage.generation() == self.generation
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.stage.api.as_ref()
    }

    pub fn limits(&self) -> CatalogConfig {
        self.stage.limits
    }

    pub fn root(&self) -> &PresentationRoot {
        &self.stage.root
    }

    /// Attaches a fragment owned by this view.
    ///
    /// Returns `None` without touching the root when the context is stale.
    pub fn attach(&self, marker: Marker, node: ViewNode) -> Option<FragmentHandle> {
        let mut registry = self.stage.registry.lock();
        if registry.generation() != self.generation {
            debug!(
                view = %self.view,
                marker = %marker,
                generation = self.generation,
                current = registry.generation(),
                "Discarding stale fragment"
            );
            return None;
        }
        let handle = self.stage.root.append(marker, node);
        registry.register(self.view, handle);
        Some(handle)
    }

    /// Appends `child` under one of this view's fragments.
    pub fn append_child(&self, container: FragmentHandle, child: ViewNode) -> bool {
        let registry = self.stage.registry.lock();
        if registry.generation() != self.generation {
            debug!(view = %self.view, generation = self.generation, "Discarding stale child");
            return false;
        }
        if !self.stage.root.append_child(container, child) {
            warn!(view = %self.view, fragment = %container, "Fragment missing, skipping render step");
            return false;
        }
        true
    }

    /// Edits one of this view's fragments in place.
    pub fn update(&self, handle: FragmentHandle, edit: impl FnOnce(&mut ViewNode)) -> bool {
        let registry = self.stage.registry.lock();
        if registry.generation() != self.generation {
            return false;
        }
        if !self.stage.root.update(handle, edit) {
            warn!(view = %self.view, fragment = %handle, "Fragment missing, skipping update");
            return false;
        }
        true
    }

    /// Removes every fragment carrying `marker`. Returns how many went.
    pub fn detach(&self, marker: Marker) -> usize {
        let mut registry = self.stage.registry.lock();
        if registry.generation() != self.generation {
            return 0;
        }
        let removed = self.stage.root.remove_marker(marker);
        for handle in &removed {
            registry.forget(*handle);
        }
        removed.len()
    }

    /// Removes one fragment, whatever generation it was attached under.
    pub fn remove(&self, handle: FragmentHandle) -> bool {
        let mut registry = self.stage.registry.lock();
        registry.forget(handle);
        self.stage.root.remove(handle).is_some()
    }

    /// Attaches a search form and makes it the form user submissions go to.
    pub fn mount_search_form(&self, category_id: Option<Id>, value: &str) -> Option<SearchForm> {
        let handle = self.attach(Marker::SearchForm, builders::search_form(value))?;
        let state = Arc::new(Mutex::new(SearchState::default()));
        *self.stage.form.lock() = Some(MountedForm {
            generation: self.generation,
            view: self.view,
            handle,
            category_id: category_id.clone(),
            state: state.clone(),
        });
        Some(SearchForm::new(self.clone(), handle, category_id, state))
    }
}
