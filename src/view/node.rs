//! Detached presentation nodes.

use std::collections::BTreeMap;

/// A node in the presentation tree.
///
/// Nodes are plain values: builders produce whole subtrees without touching
/// the shared root, and the root takes ownership when one is attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewNode {
    pub tag: String,
    pub class: Option<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref() == Some(class)
    }

    /// Depth-first search over this node and its descendants.
    pub fn find(&self, pred: &dyn Fn(&ViewNode) -> bool) -> Option<&ViewNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&ViewNode) -> bool) -> Option<&mut ViewNode> {
        if pred(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(pred))
    }

    pub fn find_tag(&self, tag: &str) -> Option<&ViewNode> {
        self.find(&|node| node.tag == tag)
    }

    pub fn find_class(&self, class: &str) -> Option<&ViewNode> {
        self.find(&|node| node.has_class(class))
    }

    /// Number of direct children carrying `class`.
    pub fn count_children(&self, class: &str) -> usize {
        self.children.iter().filter(|c| c.has_class(class)).count()
    }

    /// All text in this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
