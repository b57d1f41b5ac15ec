//! Which fragments belong to which view, and which navigation is current.

use std::collections::{HashMap, HashSet};

use crate::route::ViewKind;
use crate::view::FragmentHandle;

/// Fragment ownership per view plus the navigation generation.
///
/// Teardown is a lookup here rather than a scan of the tree. The generation
/// is bumped on every navigation; work issued under an older generation is
/// stale and must not attach anything.
#[derive(Debug, Default)]
pub struct FragmentRegistry {
    generation: u64,
    by_view: HashMap<ViewKind, HashSet<FragmentHandle>>,
}

impl FragmentRegistry {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new navigation: bumps the generation and hands back every
    /// registered fragment of every view for removal.
    pub fn begin_navigation(&mut self) -> (u64, Vec<FragmentHandle>) {
        self.generation += 1;
        let mut handles: Vec<FragmentHandle> = self
            .by_view
            .drain()
            .flat_map(|(_, handles)| handles)
            .collect();
        handles.sort();
        (self.generation, handles)
    }

    pub fn register(&mut self, view: ViewKind, handle: FragmentHandle) {
        self.by_view.entry(view).or_default().insert(handle);
    }

    pub fn forget(&mut self, handle: FragmentHandle) {
        for handles in self.by_view.values_mut() {
            handles.remove(&handle);
        }
    }

    /// Handles currently owned by `view`, in attach order.
    pub fn handles(&self, view: ViewKind) -> Vec<FragmentHandle> {
        let mut handles: Vec<FragmentHandle> = self
            .by_view
            .get(&view)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        handles.sort();
        handles
    }
}
