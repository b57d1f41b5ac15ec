//! Location → view selection.

mod descriptor;
mod view_kind;

pub use descriptor::RouteDescriptor;
pub use view_kind::{View, ViewKind};
