//! # assetspec-content
//!
//! **Tier 2 (Content Analyzer)**
//!
//! Summarises what a walk reached: how many materials, textures and clips,
//! how many morph channels in total, which channels actually deform their
//! mesh, and how many triangles the target's own renderers draw.
//!
//! ## What belongs here
//! * Kind counting over a visited set
//! * Morph liveness
//! * Polygon totals from the target hierarchy's renderers
//!
//! ## What does NOT belong here
//! * Deciding what is reachable (use assetspec-graph)
//! * Product-folder counting (use assetspec-product)

use assetspec_graph::{EditorOnly, Graph, MeshData, Node, NodeKind, VisitedSet};
use assetspec_types::{AggregateCounts, MorphEntry, MorphReport, NodeId};

/// Counts and morph report for one visited set.
///
/// The four `product_*` counters are always zero here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentAnalysis {
    pub counts: AggregateCounts,
    pub morphs: MorphReport,
}

/// Analyze every node in `visited`, in a single pass.
///
/// Polygons come from `hierarchy` instead: the components of the target's
/// own containment tree (see [`Graph::hierarchy`]). A renderer that is only
/// reached through a reference belongs to some other object and is not
/// counted.
pub fn analyze(
    graph: &Graph,
    visited: &VisitedSet,
    hierarchy: &[NodeId],
    editor_only: &EditorOnly,
) -> ContentAnalysis {
    let mut analysis = ContentAnalysis::default();
    analysis.counts.polygons = hierarchy_polygons(graph, hierarchy, editor_only);

    for id in visited {
        let Some(node) = graph.get(id) else {
            continue;
        };
        match node.kind {
            NodeKind::Material => analysis.counts.materials += 1,
            NodeKind::Texture => analysis.counts.textures += 1,
            NodeKind::AnimationClip => analysis.counts.clips += 1,
            NodeKind::Mesh => {
                if let Some(mesh) = &node.mesh {
                    analysis.counts.morph_targets += mesh.morphs.len();
                    analysis.morphs.insert(morph_entry(id, node, mesh));
                }
            }
            _ => {}
        }
    }

    tracing::debug!(
        materials = analysis.counts.materials,
        textures = analysis.counts.textures,
        clips = analysis.counts.clips,
        polygons = analysis.counts.polygons,
        morph_meshes = analysis.morphs.len(),
        "content analysis finished"
    );
    analysis
}

/// Names of channels with at least one deforming frame, in declaration order.
pub fn live_channels(mesh: &MeshData) -> Vec<String> {
    mesh.morphs
        .iter()
        .filter(|channel| channel.frames.iter().any(|f| f.has_deformation()))
        .map(|channel| channel.name.clone())
        .collect()
}

fn morph_entry(id: NodeId, node: &Node, mesh: &MeshData) -> MorphEntry {
    MorphEntry {
        mesh: id,
        name: node.name.clone(),
        channels: live_channels(mesh),
    }
}

/// Triangles drawn by the non-excluded renderers among `components`.
///
/// Counted per renderer, so a mesh shared by two renderers counts twice.
pub fn hierarchy_polygons(graph: &Graph, components: &[NodeId], editor_only: &EditorOnly) -> usize {
    components
        .iter()
        .copied()
        .filter(|id| graph.get(*id).is_some_and(|n| n.kind == NodeKind::Renderer))
        .filter(|id| !editor_only.is_excluded(graph, *id))
        .map(|id| renderer_triangles(graph, id))
        .sum()
}

fn renderer_triangles(graph: &Graph, renderer: NodeId) -> usize {
    graph
        .mesh_of(renderer)
        .and_then(|mesh| graph.get(mesh))
        .and_then(|node| node.mesh.as_ref())
        .map_or(0, MeshData::triangle_count)
}
