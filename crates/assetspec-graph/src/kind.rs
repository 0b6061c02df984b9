//! Node kinds and the pruning table.

use serde::{Deserialize, Serialize};

/// What a node is, as far as dependency scanning cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A scene object that owns components and child containers.
    Container,
    /// Transform, physics body, joint, cloth, constraint.
    TransformLike,
    Mesh,
    Texture,
    Shader,
    Material,
    TextBlob,
    AnimationClip,
    /// The bare base-object type with nothing serialized behind it.
    GenericAsset,
    /// A renderable component bound to a mesh.
    Renderer,
    /// Any other component or asset type.
    Other,
}

/// Whether the walker enumerates a node's field slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Recorded as visited, fields never read.
    Terminal,
    /// Recorded as visited, field slots followed.
    Structural,
}

impl NodeKind {
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Container,
        NodeKind::TransformLike,
        NodeKind::Mesh,
        NodeKind::Texture,
        NodeKind::Shader,
        NodeKind::Material,
        NodeKind::TextBlob,
        NodeKind::AnimationClip,
        NodeKind::GenericAsset,
        NodeKind::Renderer,
        NodeKind::Other,
    ];

    /// The pruning table.
    ///
    /// Containers are terminal here: their components are seeded by the
    /// caller from the containment hierarchy, not discovered through fields.
    pub fn traversal(self) -> Traversal {
        match self {
            NodeKind::Container
            | NodeKind::TransformLike
            | NodeKind::Mesh
            | NodeKind::Texture
            | NodeKind::Shader
            | NodeKind::TextBlob
            | NodeKind::GenericAsset => Traversal::Terminal,
            NodeKind::Material | NodeKind::AnimationClip | NodeKind::Renderer | NodeKind::Other => {
                Traversal::Structural
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        self.traversal() == Traversal::Terminal
    }
}
