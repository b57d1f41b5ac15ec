//! Presentation tree, node builders and text output.

pub mod builders;
mod node;
mod outline;
mod tree;

pub use node::ViewNode;
pub use outline::outline;
pub use tree::{Fragment, FragmentHandle, Marker, PresentationRoot, PresentationTree};
