//! Search form submission lifecycle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::Id;
use crate::controllers::RenderOutcome;
use crate::mvi::{Intent, Reducer, UiState};
use crate::view::{FragmentHandle, ViewNode};

use super::context::ViewContext;

/// Lifecycle of one search form's submissions.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading { query: String },
    Rendered { query: String, count: usize },
    Failed { query: String },
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchIntent {
    /// User submitted the form.
    Submit { query: String },
    /// Results (possibly zero) were rendered.
    Resolved { count: usize },
    /// The search call failed and the failure placeholder was rendered.
    Failed,
    /// A newer navigation made the result irrelevant.
    Discarded,
}

impl Intent for SearchIntent {}

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Submit { query } => match state {
                // One search in flight per form
                loading @ SearchState::Loading { .. } => loading,
                other if query.is_empty() => other,
                _ => SearchState::Loading { query },
            },
            SearchIntent::Resolved { count } => match state {
                SearchState::Loading { query } => SearchState::Rendered { query, count },
                other => other,
            },
            SearchIntent::Failed => match state {
                SearchState::Loading { query } => SearchState::Failed { query },
                other => other,
            },
            SearchIntent::Discarded => match state {
                SearchState::Loading { .. } => SearchState::Idle,
                other => other,
            },
        }
    }
}

/// What a submission ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The search box was empty; nothing happened.
    Empty,
    /// A search from this form was already in flight.
    Ignored,
    /// A newer navigation started while the search was in flight.
    Stale,
    /// Results were rendered, the URL pushed and the view re-routed.
    Completed(RenderOutcome),
}

/// Handle to a mounted search form.
#[derive(Clone)]
pub struct SearchForm {
    ctx: ViewContext,
    handle: FragmentHandle,
    category_id: Option<Id>,
    state: Arc<Mutex<SearchState>>,
}

impl SearchForm {
    pub(crate) fn new(
        ctx: ViewContext,
        handle: FragmentHandle,
        category_id: Option<Id>,
        state: Arc<Mutex<SearchState>>,
    ) -> Self {
        Self {
            ctx,
            handle,
            category_id,
            state,
        }
    }

    pub fn handle(&self) -> FragmentHandle {
        self.handle
    }

    /// Category the form searches within, as it was when mounted.
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    pub(crate) fn context(&self) -> &ViewContext {
        &self.ctx
    }

    /// Current text of the search box. Empty once the form is detached.
    pub fn value(&self) -> String {
        self.ctx
            .root()
            .node(self.handle)
            .and_then(|form| {
                form.find_tag("input")
                    .and_then(|input| input.attrs.get("value").cloned())
            })
            .unwrap_or_default()
    }

    /// Types into the search box.
    pub fn set_value(&self, value: &str) -> bool {
        self.edit_tag("input", |input| {
            input.attrs.insert("value".to_string(), value.to_string());
        })
    }

    /// Whether the submit button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.ctx
            .root()
            .node(self.handle)
            .and_then(|form| {
                form.find_tag("button")
                    .map(|button| button.attrs.contains_key("disabled"))
            })
            .unwrap_or(false)
    }

    pub(crate) fn set_disabled(&self, disabled: bool) {
        self.edit_tag("button", |button| {
            if disabled {
                button
                    .attrs
                    .insert("disabled".to_string(), "disabled".to_string());
            } else {
                button.attrs.remove("disabled");
            }
        });
    }

    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    pub(crate) fn dispatch(&self, intent: SearchIntent) -> SearchState {
        let mut state = self.state.lock();
        let next = SearchReducer::reduce(std::mem::take(&mut *state), intent);
        *state = next.clone();
        next
    }

    /// Whether the form is still attached under the current navigation.
    pub fn is_live(&self) -> bool {
        self.ctx.is_current() && self.ctx.root().contains(self.handle)
    }

    fn edit_tag(&self, tag: &str, edit: impl FnOnce(&mut ViewNode)) -> bool {
        // Stale forms are detached already; the root ignores the edit.
        self.ctx.root().update(self.handle, |form| {
            if let Some(node) = form.find_mut(&|n| n.tag == tag) {
                edit(node);
            }
        })
    }
}
