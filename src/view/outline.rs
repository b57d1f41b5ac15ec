//! Plain-text rendering of the presentation tree.

use std::fmt::Write;

use super::node::ViewNode;
use super::tree::PresentationTree;

/// One line per node, indented by depth, each fragment prefixed with its
/// marker name.
pub fn outline(tree: &PresentationTree) -> String {
    let mut out = String::new();
    for fragment in tree.fragments() {
        let _ = writeln!(out, "[{}]", fragment.marker);
        write_node(&mut out, &fragment.node, 1);
    }
    out
}

fn write_node(out: &mut String, node: &ViewNode, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", node.tag, indent = depth * 2);
    if let Some(class) = &node.class {
        let _ = write!(out, ".{}", class);
    }
    for (name, value) in &node.attrs {
        let _ = write!(out, " {}=\"{}\"", name, value);
    }
    if let Some(text) = &node.text {
        let _ = write!(out, " {:?}", text);
    }
    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
