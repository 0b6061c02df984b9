//! # assetspec-product
//!
//! **Tier 2 (Utilities)**
//!
//! Counts the materials, textures, clips and model files already shipped
//! inside a product folder on disk.
//!
//! ## What belongs here
//! * Filesystem listing of the product folder (gitignore-aware)
//! * Extension classification
//!
//! ## What does NOT belong here
//! * Anything graph-based (use assetspec-content)
//! * File modification

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use assetspec_types::ProductCounts;
use ignore::WalkBuilder;

/// Bundle category of a product file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Material,
    Texture,
    Clip,
    Mesh,
}

/// Classify a lowercase extension without the dot.
pub fn asset_category(ext: &str) -> Option<AssetCategory> {
    match ext {
        "mat" => Some(AssetCategory::Material),
        "png" | "jpg" | "jpeg" | "tga" | "psd" | "tif" | "tiff" | "bmp" | "gif" | "exr" | "hdr"
        | "iff" | "pict" | "rendertexture" | "cubemap" => Some(AssetCategory::Texture),
        "anim" => Some(AssetCategory::Clip),
        "fbx" | "obj" | "blend" | "dae" | "3ds" | "dxf" | "max" | "ma" | "mb" | "c4d" | "lxo" => {
            Some(AssetCategory::Mesh)
        }
        _ => None,
    }
}

/// Every regular file below `root`, relative to it, sorted.
///
/// Hidden files are included; symlinks are not followed.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Product folder not found: {}", root.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    builder.git_ignore(true);
    builder.git_exclude(true);
    builder.git_global(true);
    builder.follow_links(false);

    for entry in builder.build() {
        let entry = entry.with_context(|| format!("Failed to list {}", root.display()))?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path().to_path_buf();
        let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        files.push(rel);
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    Ok(files)
}

/// Tally already-listed files by category.
pub fn tally(files: &[PathBuf]) -> ProductCounts {
    let mut counts = ProductCounts::default();
    for rel in files {
        let ext = rel
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match asset_category(&ext) {
            Some(AssetCategory::Material) => counts.materials += 1,
            Some(AssetCategory::Texture) => counts.textures += 1,
            Some(AssetCategory::Clip) => counts.clips += 1,
            Some(AssetCategory::Mesh) => counts.meshes += 1,
            None => {}
        }
    }
    counts
}

/// List and classify the product folder at `dir`.
pub fn count_product_assets(dir: &Path) -> Result<ProductCounts> {
    let files = list_files(dir)?;
    let counts = tally(&files);
    tracing::debug!(
        dir = %dir.display(),
        files = files.len(),
        materials = counts.materials,
        textures = counts.textures,
        clips = counts.clips,
        meshes = counts.meshes,
        "product folder counted"
    );
    Ok(counts)
}
