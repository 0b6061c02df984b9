//! # assetspec-core
//!
//! This crate is the **primary library interface** for `assetspec`.
//! It runs the walk, package resolution, content analysis and product
//! counting for one scan target and assembles a [`ScanReport`].
//!
//! If you are embedding `assetspec` into another Rust application, depend on
//! this crate and `assetspec-types`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use assetspec_core::{ScanRequest, scan};
//! use assetspec_graph::Graph;
//! use assetspec_settings::ScanSettings;
//! use assetspec_types::{NodeId, ScanTarget};
//!
//! let graph = Graph::from_file("avatar.graph.json".as_ref()).expect("graph");
//! let settings = ScanSettings::for_project("/work/MyProject");
//! let request = ScanRequest {
//!     graph: &graph,
//!     target: &ScanTarget::Prefab { root: NodeId(0) },
//!     settings: &settings,
//! };
//! let report = scan(&request, None).expect("scan");
//! println!("{} packages", report.packages.len());
//! ```

mod error;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use assetspec_content::analyze;
use assetspec_graph::{EditorOnly, Graph, walk_excluding};
use assetspec_package::{FsManifestSource, resolve_packages};
use assetspec_path::normalize_dir;
use assetspec_product::count_product_assets;
use assetspec_settings::ScanSettings;
use assetspec_types::{NodeId, ProductCounts, ScanReport, ScanTarget, ToolInfo};

pub use error::ScanError;

// Re-export for convenience
pub use assetspec_graph as graph;
pub use assetspec_settings as settings;
pub use assetspec_types as types;

/// External statistics collaborator, run for prefab targets only.
///
/// Its output is carried in [`ScanReport::stats`] without interpretation.
pub trait StatsProvider {
    fn collect(&self, graph: &Graph, root: NodeId) -> anyhow::Result<serde_json::Value>;
}

/// Inputs for one scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanRequest<'a> {
    pub graph: &'a Graph,
    pub target: &'a ScanTarget,
    pub settings: &'a ScanSettings,
}

/// Runs the complete pipeline: Walk -> Resolve -> Analyze -> Report.
pub fn scan(request: &ScanRequest<'_>, stats: Option<&dyn StatsProvider>) -> Result<ScanReport, ScanError> {
    let ScanRequest {
        graph,
        target,
        settings,
    } = *request;
    settings.validate()?;

    let mut warnings = Vec::new();

    // 1. Walk
    let seeds = graph.seeds(target);
    let editor_only = EditorOnly::new(settings.editor_only_tag.clone());
    let visited = walk_excluding(graph, &seeds, &editor_only);

    // 2. Resolve packages
    let boundary = product_boundary(settings);
    let source = FsManifestSource::new(&settings.project_root);
    let resolution = resolve_packages(graph, &visited, &settings.layout, boundary.as_deref(), &source);

    // 3. Analyze
    let analysis = analyze(graph, &visited, &graph.hierarchy(target), &editor_only);

    // 4. Product folder
    let product = match &boundary {
        Some(dir) if settings.count_product_assets => {
            product_counts(&settings.project_root, dir, &mut warnings)
        }
        _ => ProductCounts::default(),
    };

    // 5. Statistics
    let stats = match (target, stats) {
        (ScanTarget::Prefab { root }, Some(provider)) => collect_stats(provider, graph, *root, &mut warnings),
        _ => None,
    };

    tracing::info!(
        seeds = seeds.len(),
        visited = visited.len(),
        packages = resolution.packages.len(),
        unattributed = resolution.unattributed.len(),
        "scan finished"
    );

    Ok(ScanReport {
        schema_version: assetspec_types::SCHEMA_VERSION,
        generated_at_ms: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
        tool: ToolInfo::current(),
        target: target.clone(),
        visited: visited.len(),
        packages: resolution.packages,
        unattributed: resolution.unattributed,
        counts: analysis.counts.with_product(product),
        morphs: analysis.morphs,
        stats,
        warnings,
    })
}

/// Load a graph document from disk and scan it.
pub fn scan_file(
    graph_path: &Path,
    target: &ScanTarget,
    settings: &ScanSettings,
    stats: Option<&dyn StatsProvider>,
) -> Result<ScanReport, ScanError> {
    let graph = Graph::from_file(graph_path)?;
    scan(
        &ScanRequest {
            graph: &graph,
            target,
            settings,
        },
        stats,
    )
}

fn product_boundary(settings: &ScanSettings) -> Option<String> {
    settings
        .product_dir
        .as_deref()
        .map(normalize_dir)
        .filter(|dir| !dir.is_empty())
}

fn product_counts(project_root: &str, dir: &str, warnings: &mut Vec<String>) -> ProductCounts {
    let path: PathBuf = Path::new(project_root).join(dir);
    match count_product_assets(&path) {
        Ok(counts) => counts,
        Err(err) => {
            tracing::warn!(dir, error = %err, "product folder could not be counted");
            warnings.push(format!("product folder {dir}: {err:#}"));
            ProductCounts::default()
        }
    }
}

fn collect_stats(
    provider: &dyn StatsProvider,
    graph: &Graph,
    root: NodeId,
    warnings: &mut Vec<String>,
) -> Option<serde_json::Value> {
    match provider.collect(graph, root) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%root, error = %err, "statistics collaborator failed");
            warnings.push(format!("statistics: {err:#}"));
            None
        }
    }
}
