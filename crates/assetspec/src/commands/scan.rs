use std::fs;

use anyhow::{Context, Result, bail};
use assetspec_core::{ScanRequest, scan};
use assetspec_graph::Graph;
use assetspec_types::{NodeId, ScanTarget};

use crate::cli::{OutputFormat, ScanArgs};
use crate::config;

pub(crate) fn handle(args: ScanArgs) -> Result<()> {
    let settings = config::resolve_settings(&args)?;
    let target = target_of(&args)?;
    let graph = Graph::from_file(&args.graph)
        .with_context(|| format!("Failed to load graph document {}", args.graph.display()))?;

    let request = ScanRequest {
        graph: &graph,
        target: &target,
        settings: &settings,
    };
    let report = scan(&request, None)?;

    let text = match args.format {
        OutputFormat::Json => serde_json::to_string(&report)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&report)?,
    };
    match &args.output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn target_of(args: &ScanArgs) -> Result<ScanTarget> {
    if let Some(root) = args.root {
        return Ok(ScanTarget::Prefab { root: NodeId(root) });
    }
    if !args.scene.is_empty() {
        return Ok(ScanTarget::Scene {
            roots: args.scene.iter().copied().map(NodeId).collect(),
        });
    }
    if let Some(path) = &args.asset {
        return Ok(ScanTarget::Asset { path: path.clone() });
    }
    bail!("One of --root, --scene or --asset is required")
}
