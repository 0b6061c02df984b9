//! Editor-only exclusion.

use assetspec_types::NodeId;

use crate::graph::Graph;

/// The tag that marks a node and its whole subtree as editor-only.
pub const DEFAULT_EDITOR_ONLY_TAG: &str = "EditorOnly";

/// Predicate: does `id` or any containment ancestor carry `tag`?
#[derive(Debug, Clone)]
pub struct EditorOnly {
    tag: String,
}

impl Default for EditorOnly {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_ONLY_TAG)
    }
}

impl EditorOnly {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Walks `parent` links upward until a tagged node or the top of the chain.
    /// At most one step per node in the graph.
    ///
    /// Assets have no parent, so only their own tag matters.
    pub fn is_excluded(&self, graph: &Graph, id: NodeId) -> bool {
        let mut current = Some(id);
        for _ in 0..=graph.len() {
            let Some(cur) = current else {
                return false;
            };
            let Some(node) = graph.get(cur) else {
                return false;
            };
            if node.tag.as_deref() == Some(self.tag.as_str()) {
                return true;
            }
            current = node.parent;
        }
        false
    }
}
