//! Loading indicator.

use std::sync::Arc;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;

use crate::view::{builders, FragmentHandle, Marker};

use super::context::ViewContext;
use super::search::SearchForm;

/// Shows a loading marker and disables the search form while one fetch for
/// the current view is in flight.
///
/// `start` and `stop` are idempotent. Prefer [`LoadingIndicator::activate`],
/// which stops the indicator when the returned guard drops, whatever the
/// fetch's outcome.
#[derive(Clone)]
pub struct LoadingIndicator {
    ctx: ViewContext,
    form: Option<SearchForm>,
    active: Arc<Mutex<Option<FragmentHandle>>>,
}

pub type LoadingGuard = ScopeGuard<LoadingIndicator, fn(LoadingIndicator)>;

impl LoadingIndicator {
    pub fn new(ctx: ViewContext, form: Option<SearchForm>) -> Self {
        Self {
            ctx,
            form,
            active: Arc::new(Mutex::new(None)),
        }
    }

    pub fn start(&self) {
        let mut active = self.active.lock();
        if active.is_some() {
            return;
        }
        *active = self.ctx.attach(Marker::Loading, builders::loading());
        if let Some(form) = &self.form {
            form.set_disabled(true);
        }
    }

    pub fn stop(&self) {
        let handle = self.active.lock().take();
        if let Some(handle) = handle {
            self.ctx.remove(handle);
        }
        if let Some(form) = &self.form {
            form.set_disabled(false);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Starts the indicator and returns a guard that stops it on drop.
    pub fn activate(self) -> LoadingGuard {
        self.start();
        scopeguard::guard(self, release as fn(LoadingIndicator))
    }
}

fn release(indicator: LoadingIndicator) {
    indicator.stop();
}
