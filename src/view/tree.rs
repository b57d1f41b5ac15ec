//! The shared presentation root.
//!
//! The root is a flat, ordered list of fragments. Each fragment is one
//! top-level node tagged with the [`Marker`] naming its role and addressed
//! by a [`FragmentHandle`] issued at attach time. Handles are never reused,
//! so a handle held by a discarded view cannot reach a newer view's nodes.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::node::ViewNode;

/// Named role of a top-level fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Heading,
    SearchForm,
    ProductList,
    CategoriesButton,
    CategoriesHeading,
    CategoryList,
    DetailBlock,
    RelatedHeading,
    RelatedList,
    Results,
    Loading,
}

impl Marker {
    pub fn name(self) -> &'static str {
        match self {
            Marker::Heading => "heading",
            Marker::SearchForm => "search-form",
            Marker::ProductList => "product-list",
            Marker::CategoriesButton => "categories-button",
            Marker::CategoriesHeading => "categories-heading",
            Marker::CategoryList => "category-list",
            Marker::DetailBlock => "detail-block",
            Marker::RelatedHeading => "related-heading",
            Marker::RelatedList => "related-list",
            Marker::Results => "results",
            Marker::Loading => "loading",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of one attached fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentHandle(u64);

impl fmt::Display for FragmentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub handle: FragmentHandle,
    pub marker: Marker,
    pub node: ViewNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationTree {
    next_handle: u64,
    fragments: Vec<Fragment>,
}

impl PresentationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `node` at the end of the root.
    pub fn append(&mut self, marker: Marker, node: ViewNode) -> FragmentHandle {
        let handle = FragmentHandle(self.next_handle);
        self.next_handle += 1;
        self.fragments.push(Fragment {
            handle,
            marker,
            node,
        });
        handle
    }

    /// Appends `child` under the fragment's top-level node.
    ///
    /// Returns `false` if the fragment is no longer attached.
    pub fn append_child(&mut self, handle: FragmentHandle, child: ViewNode) -> bool {
        match self.fragment_mut(handle) {
            Some(fragment) => {
                fragment.node.children.push(child);
                true
            }
            None => false,
        }
    }

    /// Edits the fragment's node in place. Returns `false` if detached.
    pub fn update(&mut self, handle: FragmentHandle, edit: impl FnOnce(&mut ViewNode)) -> bool {
        match self.fragment_mut(handle) {
            Some(fragment) => {
                edit(&mut fragment.node);
                true
            }
            None => false,
        }
    }

    /// Detaches one fragment, returning its node.
    pub fn remove(&mut self, handle: FragmentHandle) -> Option<ViewNode> {
        let index = self.fragments.iter().position(|f| f.handle == handle)?;
        Some(self.fragments.remove(index).node)
    }

    /// Detaches every fragment carrying `marker`, returning their handles.
    pub fn remove_marker(&mut self, marker: Marker) -> Vec<FragmentHandle> {
        let mut removed = Vec::new();
        self.fragments.retain(|f| {
            if f.marker == marker {
                removed.push(f.handle);
                false
            } else {
                true
            }
        });
        removed
    }

    /// First fragment node carrying `marker`.
    pub fn query(&self, marker: Marker) -> Option<&ViewNode> {
        self.fragments
            .iter()
            .find(|f| f.marker == marker)
            .map(|f| &f.node)
    }

    pub fn query_all(&self, marker: Marker) -> Vec<&ViewNode> {
        self.fragments
            .iter()
            .filter(|f| f.marker == marker)
            .map(|f| &f.node)
            .collect()
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.fragments.iter().filter(|f| f.marker == marker).count()
    }

    pub fn node(&self, handle: FragmentHandle) -> Option<&ViewNode> {
        self.fragments
            .iter()
            .find(|f| f.handle == handle)
            .map(|f| &f.node)
    }

    pub fn contains(&self, handle: FragmentHandle) -> bool {
        self.fragments.iter().any(|f| f.handle == handle)
    }

    /// Markers of every attached fragment, in attach order.
    pub fn markers(&self) -> Vec<Marker> {
        self.fragments.iter().map(|f| f.marker).collect()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn fragment_mut(&mut self, handle: FragmentHandle) -> Option<&mut Fragment> {
        self.fragments.iter_mut().find(|f| f.handle == handle)
    }
}

/// Shared handle to the presentation tree.
///
/// Cloning is cheap; every clone mutates the same tree. The lock is only
/// ever held for the duration of a single operation, never across an
/// `.await`.
#[derive(Clone, Default)]
pub struct PresentationRoot {
    inner: Arc<Mutex<PresentationTree>>,
}

impl PresentationRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, marker: Marker, node: ViewNode) -> FragmentHandle {
        self.inner.lock().append(marker, node)
    }

    pub fn append_child(&self, handle: FragmentHandle, child: ViewNode) -> bool {
        self.inner.lock().append_child(handle, child)
    }

    pub fn update(&self, handle: FragmentHandle, edit: impl FnOnce(&mut ViewNode)) -> bool {
        self.inner.lock().update(handle, edit)
    }

    pub fn remove(&self, handle: FragmentHandle) -> Option<ViewNode> {
        self.inner.lock().remove(handle)
    }

    pub fn remove_marker(&self, marker: Marker) -> Vec<FragmentHandle> {
        self.inner.lock().remove_marker(marker)
    }

    pub fn query(&self, marker: Marker) -> Option<ViewNode> {
        self.inner.lock().query(marker).cloned()
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.inner.lock().count(marker)
    }

    pub fn node(&self, handle: FragmentHandle) -> Option<ViewNode> {
        self.inner.lock().node(handle).cloned()
    }

    pub fn contains(&self, handle: FragmentHandle) -> bool {
        self.inner.lock().contains(handle)
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.inner.lock().markers()
    }

    /// Copy of the whole tree, for rendering and assertions.
    pub fn snapshot(&self) -> PresentationTree {
        self.inner.lock().clone()
    }
}
