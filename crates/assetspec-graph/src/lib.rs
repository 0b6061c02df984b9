//! # assetspec-graph
//!
//! **Tier 1 (Graph Walker)**
//!
//! The object graph of a packaged asset and the walk that collects every
//! sub-asset it references. Nodes expose an ordered list of typed field
//! slots; the walker only needs those slots and the node's kind, never the
//! concrete shape of a node.
//!
//! ## What belongs here
//! * Node, field slot and mesh data types (Serde)
//! * The kind → terminal/structural pruning table
//! * Graph arena, document loading, scan seeding
//! * Editor-only exclusion and the reference walk
//!
//! ## What does NOT belong here
//! * Package attribution (use assetspec-package)
//! * Counting and morph analysis (use assetspec-content)
//! * Filesystem access beyond loading a graph document
//!
//! ## Example
//!
//! ```
//! use assetspec_graph::{walk_excluding, EditorOnly, GraphBuilder, Node, NodeKind};
//!
//! let mut b = GraphBuilder::new();
//! let tex = b.add(Node::new("T", NodeKind::Texture).with_path("Assets/T.png"));
//! let mat = b.add(Node::new("M", NodeKind::Material).with_ref("_MainTex", tex));
//! let graph = b.build().unwrap();
//!
//! let visited = walk_excluding(&graph, &[mat], &EditorOnly::default());
//! assert_eq!(visited.len(), 2);
//! ```

mod exclude;
mod graph;
mod kind;
mod node;
mod walk;

pub use assetspec_types::NodeId;
pub use exclude::{DEFAULT_EDITOR_ONLY_TAG, EditorOnly};
pub use graph::{Graph, GraphBuilder, GraphDocument, GraphError};
pub use kind::{NodeKind, Traversal};
pub use node::{DELTA_EPSILON, Field, FieldValue, MeshData, MorphChannel, MorphFrame, Node};
pub use walk::{VisitedSet, walk, walk_excluding};
