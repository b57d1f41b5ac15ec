//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submissions, clicks)
/// - Fetch outcomes (results arrived, request failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
