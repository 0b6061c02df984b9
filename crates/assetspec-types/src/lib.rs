//! # assetspec-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures and contracts for `assetspec`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON shape of
//! [`ScanReport`], not Rust struct literals. Removed or renamed fields bump
//! `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (reports, records, counters)
//! * Node identity and scan target descriptions
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Traversal, resolution or analysis logic

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for [`ScanReport`].
pub const SCHEMA_VERSION: u32 = 1;

/// Stable identity of a node inside one graph document.
///
/// Identity is positional (the node's index in the document), never a hash of
/// the node's content: two nodes with identical fields are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the caller asked to scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanTarget {
    /// A container node and everything it owns.
    Prefab { root: NodeId },
    /// Several top-level containers forming one scene.
    Scene { roots: Vec<NodeId> },
    /// Every sub-asset loaded from one storage location.
    Asset { path: String },
}

/// An external package supplying at least one referenced asset.
///
/// Ordering is `(display_name, version)`, so sets of records come out sorted
/// by name the way a requirements list is read.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageRecord {
    pub display_name: String,
    /// Empty when the manifest declares no version.
    pub version: String,
}

impl PackageRecord {
    pub fn new(display_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            version: version.into(),
        }
    }
}

/// Assets already shipped inside the product folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCounts {
    pub materials: usize,
    pub textures: usize,
    pub clips: usize,
    /// Model source files (fbx, blend, ...), counted per file.
    pub meshes: usize,
}

/// Aggregate counters for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    pub polygons: usize,
    pub materials: usize,
    pub textures: usize,
    pub clips: usize,
    pub morph_targets: usize,
    pub product_materials: usize,
    pub product_textures: usize,
    pub product_clips: usize,
    pub product_meshes: usize,
}

impl AggregateCounts {
    /// Copy the product-bundle counters in, leaving the dependency counters untouched.
    pub fn with_product(mut self, product: ProductCounts) -> Self {
        self.product_materials = product.materials;
        self.product_textures = product.textures;
        self.product_clips = product.clips;
        self.product_meshes = product.meshes;
        self
    }
}

/// Live morph channels of one mesh, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphEntry {
    pub mesh: NodeId,
    pub name: String,
    pub channels: Vec<String>,
}

/// Mesh identity → live morph channels.
///
/// Only meshes with at least one live channel have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphReport {
    entries: BTreeMap<NodeId, MorphEntry>,
}

impl MorphReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mesh entry. Entries with no channels are dropped.
    pub fn insert(&mut self, entry: MorphEntry) {
        if entry.channels.is_empty() {
            return;
        }
        self.entries.insert(entry.mesh, entry);
    }

    pub fn get(&self, mesh: NodeId) -> Option<&MorphEntry> {
        self.entries.get(&mesh)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MorphEntry> {
        self.entries.values()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "assetspec".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Everything one scan hands to the rendering side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub target: ScanTarget,
    /// Size of the deduplicated visited set.
    pub visited: usize,
    pub packages: BTreeSet<PackageRecord>,
    /// Directories (with trailing `/`) holding assets no manifest claims.
    pub unattributed: BTreeSet<String>,
    pub counts: AggregateCounts,
    pub morphs: MorphReport,
    /// Opaque output of the external statistics collaborator, if one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
    #[serde(default)]
    pub warnings: Vec<String>,
}
