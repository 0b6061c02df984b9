//! Cycle-safe reference walk.

use std::collections::HashSet;

use assetspec_types::NodeId;

use crate::exclude::EditorOnly;
use crate::graph::Graph;
use crate::kind::Traversal;

/// Deduplicated set of reached nodes.
///
/// Iteration yields nodes in the order they were first reached.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    order: Vec<NodeId>,
    seen: HashSet<NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the node was already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

impl<'a> IntoIterator for &'a VisitedSet {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// Walk every node reachable from `seeds` through reference slots.
///
/// A node is recorded before its slots are read, so back-edges into a node
/// still being expanded find it already visited. Excluded nodes are never
/// recorded and nothing is reached through them. Terminal kinds are recorded
/// but not expanded. References to ids outside the graph are ignored.
pub fn walk<F>(graph: &Graph, seeds: &[NodeId], is_excluded: F) -> VisitedSet
where
    F: Fn(&Graph, NodeId) -> bool,
{
    let mut visited = VisitedSet::new();
    let mut stack: Vec<NodeId> = seeds.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        if visited.contains(id) {
            continue;
        }
        let Some(node) = graph.get(id) else {
            continue;
        };
        if is_excluded(graph, id) {
            continue;
        }
        visited.insert(id);

        if node.kind.traversal() == Traversal::Terminal {
            continue;
        }
        for target in node.references().into_iter().rev() {
            if !visited.contains(target) {
                stack.push(target);
            }
        }
    }

    tracing::debug!(
        seeds = seeds.len(),
        visited = visited.len(),
        "reference walk finished"
    );
    visited
}

/// [`walk`] with the editor-only predicate.
pub fn walk_excluding(graph: &Graph, seeds: &[NodeId], editor_only: &EditorOnly) -> VisitedSet {
    walk(graph, seeds, |g, id| editor_only.is_excluded(g, id))
}
