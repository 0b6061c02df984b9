//! Nodes and their typed field slots.

use assetspec_types::NodeId;
use serde::{Deserialize, Serialize};

use crate::kind::NodeKind;

/// One slot of a node's serialized state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Typed slot content. `Ref` is the only kind of graph edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Scalar(f64),
    Bool(bool),
    /// Opaque text. Never followed, whatever it contains.
    String(String),
    Ref(Option<NodeId>),
    /// A nested struct or array, entered in place.
    Composite(Vec<Field>),
}

/// Triangle and morph data carried by `Mesh` nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    #[serde(default)]
    pub index_count: usize,
    #[serde(default)]
    pub morphs: Vec<MorphChannel>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.index_count / 3
    }
}

/// A named deformation target ("blend shape").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphChannel {
    pub name: String,
    #[serde(default)]
    pub frames: Vec<MorphFrame>,
}

/// One keyframe of a morph channel: per-vertex deltas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphFrame {
    #[serde(default = "default_weight")]
    pub weight: f32,
    #[serde(default)]
    pub delta_vertices: Vec<[f32; 3]>,
    #[serde(default)]
    pub delta_normals: Vec<[f32; 3]>,
    #[serde(default)]
    pub delta_tangents: Vec<[f32; 3]>,
}

fn default_weight() -> f32 {
    100.0
}

/// Deltas shorter than this are the zero vector.
pub const DELTA_EPSILON: f32 = 1e-5;

fn is_zero_delta(d: &[f32; 3]) -> bool {
    let sqr = d[0] * d[0] + d[1] * d[1] + d[2] * d[2];
    sqr < DELTA_EPSILON * DELTA_EPSILON
}

impl MorphFrame {
    /// Whether any vertex, normal or tangent delta differs from zero.
    pub fn has_deformation(&self) -> bool {
        self.delta_vertices
            .iter()
            .chain(&self.delta_normals)
            .chain(&self.delta_tangents)
            .any(|d| !is_zero_delta(d))
    }
}

/// A traversable unit: scene object, component, or asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    /// Project-relative storage location; absent for runtime-only nodes.
    #[serde(default, rename = "path", skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Owning container (for components) or parent container (for containers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshData>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            storage_path: None,
            tag: None,
            parent: None,
            fields: Vec::new(),
            mesh: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    pub fn with_ref(self, name: impl Into<String>, target: NodeId) -> Self {
        self.with_field(name, FieldValue::Ref(Some(target)))
    }

    pub fn with_mesh(mut self, mesh: MeshData) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Targets of every `Ref` slot, nested composites included, in declared order.
    /// `String` slots are skipped without being looked into.
    pub fn references(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        collect_references(&self.fields, &mut out);
        out
    }
}

fn collect_references(fields: &[Field], out: &mut Vec<NodeId>) {
    for field in fields {
        match &field.value {
            FieldValue::Ref(Some(target)) => out.push(*target),
            FieldValue::Composite(inner) => collect_references(inner, out),
            FieldValue::String(_)
            | FieldValue::Ref(None)
            | FieldValue::Scalar(_)
            | FieldValue::Bool(_) => {}
        }
    }
}
