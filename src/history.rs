//! Session history: the location stack the router reads from.
//!
//! The current entry is the single source of truth for which view is shown.
//! State-changing actions push a canonical location; back/forward move the
//! cursor and then run the registered traversal handler (the router).

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::route::RouteDescriptor;

pub type TraversalFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
pub type TraversalHandler = Arc<dyn Fn() -> TraversalFuture + Send + Sync>;

struct Entries {
    locations: Vec<String>,
    cursor: usize,
}

#[derive(Clone)]
pub struct NavigationHistory {
    entries: Arc<Mutex<Entries>>,
    on_traversal: Arc<Mutex<Option<TraversalHandler>>>,
}

impl NavigationHistory {
    pub fn new(initial_location: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Entries {
                locations: vec![initial_location.into()],
                cursor: 0,
            })),
            on_traversal: Arc::new(Mutex::new(None)),
        }
    }

    /// The location of the current entry.
    pub fn location(&self) -> String {
        let entries = self.entries.lock();
        entries.locations[entries.cursor].clone()
    }

    /// Pushes `descriptor`'s canonical location as the new current entry.
    ///
    /// Entries after the cursor are dropped, as a browser does on
    /// `pushState`. Nothing is routed; the caller re-routes when ready.
    pub fn push_canonical_url(&self, descriptor: &RouteDescriptor) {
        self.push_location(descriptor.to_location());
    }

    /// Pushes a raw location, as typed by the user.
    pub fn push_location(&self, location: impl Into<String>) {
        let location = location.into();
        let mut entries = self.entries.lock();
        let keep = entries.cursor + 1;
        entries.locations.truncate(keep);
        entries.locations.push(location.clone());
        entries.cursor = keep;
        tracing::debug!(location = %location, depth = entries.locations.len(), "History push");
    }

    /// Registers the callback run after every back/forward move.
    /// A later registration replaces the earlier one.
    pub fn on_history_traversal<F>(&self, handler: F)
    where
        F: Fn() -> TraversalFuture + Send + Sync + 'static,
    {
        *self.on_traversal.lock() = Some(Arc::new(handler));
    }

    /// Moves one entry back. Returns `false` at the oldest entry.
    pub async fn back(&self) -> bool {
        self.traverse(-1).await
    }

    /// Moves one entry forward. Returns `false` at the newest entry.
    pub async fn forward(&self) -> bool {
        self.traverse(1).await
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.lock().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let entries = self.entries.lock();
        entries.cursor + 1 < entries.locations.len()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().locations.clone()
    }

    async fn traverse(&self, delta: isize) -> bool {
        let moved = {
            let mut entries = self.entries.lock();
            let target = entries.cursor as isize + delta;
            if target < 0 || target as usize >= entries.locations.len() {
                false
            } else {
                entries.cursor = target as usize;
                tracing::debug!(
                    location = %entries.locations[entries.cursor],
                    "History traversal"
                );
                true
            }
        };
        if !moved {
            return false;
        }

        let handler = self.on_traversal.lock().clone();
        if let Some(handler) = handler {
            handler().await;
        }
        true
    }
}
