//! The node arena and scan seeding.

use std::path::Path;

use assetspec_path::normalize_rel_path;
use assetspec_types::{NodeId, ScanTarget};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::NodeKind;
use crate::node::{FieldValue, Node};

/// Errors from loading or assembling a graph document.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read graph document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Node {node} names parent {parent}, which does not exist")]
    InvalidParent { node: NodeId, parent: NodeId },

    #[error("Node {node} is its own containment ancestor")]
    ContainmentCycle { node: NodeId },
}

/// Serialized form of a graph: node ids are positions in `nodes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
}

/// An immutable arena of nodes with a containment index.
///
/// Parent links are validated on construction: every parent exists and the
/// containment hierarchy is acyclic. Reference slots are not validated; a
/// dangling reference is simply never followed.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
}

impl Graph {
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, GraphError> {
        let len = nodes.len();
        let mut children = vec![Vec::new(); len];
        for (idx, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                if parent.index() >= len || parent.index() == idx {
                    return Err(GraphError::InvalidParent {
                        node: NodeId(idx),
                        parent,
                    });
                }
                children[parent.index()].push(NodeId(idx));
            }
        }

        for idx in 0..len {
            let mut current = nodes[idx].parent;
            let mut steps = 0usize;
            while let Some(p) = current {
                steps += 1;
                if steps > len {
                    return Err(GraphError::ContainmentCycle { node: NodeId(idx) });
                }
                current = nodes[p.index()].parent;
            }
        }

        Ok(Self { nodes, children })
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let doc: GraphDocument = serde_json::from_str(json)?;
        Self::from_nodes(doc.nodes)
    }

    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Direct containment children, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first `Ref` slot of `id` that targets a `Mesh` node.
    pub fn mesh_of(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        node.references()
            .into_iter()
            .find(|target| self.get(*target).is_some_and(|n| n.kind == NodeKind::Mesh))
    }

    /// Every component owned by `root` or by any container below it.
    ///
    /// A container's own components come before those of its child containers,
    /// which are visited depth-first in document order. Containers themselves
    /// are not included.
    pub fn components_in_children(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(root) {
            return out;
        }
        let mut stack = vec![root];
        while let Some(container) = stack.pop() {
            let kids = self.children(container);
            for &child in kids {
                if self.nodes[child.index()].kind != NodeKind::Container {
                    out.push(child);
                }
            }
            for &child in kids.iter().rev() {
                if self.nodes[child.index()].kind == NodeKind::Container {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Every node loaded from `path`.
    ///
    /// Both sides are compared after slash and `./` normalization.
    pub fn nodes_at_path(&self, path: &str) -> Vec<NodeId> {
        let wanted = normalize_rel_path(path);
        self.iter()
            .filter(|(_, n)| {
                n.storage_path
                    .as_deref()
                    .is_some_and(|p| normalize_rel_path(p) == wanted)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Initial walk seeds for a scan target.
    ///
    /// Prefab and scene targets seed their [`hierarchy`](Self::hierarchy);
    /// asset targets seed every node stored at the path.
    pub fn seeds(&self, target: &ScanTarget) -> Vec<NodeId> {
        match target {
            ScanTarget::Asset { path } => self.nodes_at_path(path),
            _ => self.hierarchy(target),
        }
    }

    /// Components that make up the target's own containment hierarchy.
    ///
    /// Unknown root ids contribute nothing. A non-container root stands for
    /// itself. Asset targets have no hierarchy.
    pub fn hierarchy(&self, target: &ScanTarget) -> Vec<NodeId> {
        match target {
            ScanTarget::Prefab { root } => self.seeds_for_root(*root),
            ScanTarget::Scene { roots } => roots
                .iter()
                .flat_map(|root| self.seeds_for_root(*root))
                .collect(),
            ScanTarget::Asset { .. } => Vec::new(),
        }
    }

    fn seeds_for_root(&self, root: NodeId) -> Vec<NodeId> {
        match self.get(root) {
            None => {
                tracing::debug!(%root, "scan root not present in graph");
                Vec::new()
            }
            Some(node) if node.kind == NodeKind::Container => self.components_in_children(root),
            Some(_) => vec![root],
        }
    }

    /// Count of `Ref` edges whose target exists.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| {
                n.references()
                    .into_iter()
                    .filter(|t| self.contains(*t))
                    .count()
            })
            .sum()
    }
}

/// Incremental graph construction for hosts and tests.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Append a reference slot to an existing node (used to close cycles).
    ///
    /// # Panics
    ///
    /// Panics if `from` was not returned by this builder.
    pub fn link(&mut self, from: NodeId, field: impl Into<String>, to: NodeId) {
        self.nodes[from.index()]
            .fields
            .push(crate::node::Field::new(field, FieldValue::Ref(Some(to))));
    }

    pub fn build(self) -> Result<Graph, GraphError> {
        Graph::from_nodes(self.nodes)
    }
}
