//! Model-View-Intent (MVI) primitives.
//!
//! Stateful interactions (such as a search form's submission lifecycle) are
//! modelled as unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of one interaction's state
//! - **Intent**: User actions or fetch outcomes
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
