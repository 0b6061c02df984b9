//! Nearest-manifest resolution with per-directory memoisation.

use std::collections::{BTreeSet, HashMap};

use assetspec_graph::{Graph, VisitedSet};
use assetspec_path::{
    first_segment_under, is_under, normalize_dir, normalize_rel_path, parent, with_trailing_slash,
};
use assetspec_settings::LayoutSettings;
use assetspec_types::PackageRecord;

use crate::manifest::{ManifestInfo, ManifestSource};

/// Outcome of looking for the manifest that owns a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLookup {
    Package(PackageRecord),
    /// A manifest exists but declares neither `displayName` nor `name`.
    Nameless,
    /// No manifest up to and including the sentinel directory.
    Unattributed,
}

/// What one storage path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    Package(PackageRecord),
    Nameless,
    /// No owning manifest; carries the containing directory with a trailing `/`.
    Unattributed(String),
    /// No owning manifest, but the path lies inside the product boundary.
    InProduct,
    /// Not under any managed or searched root.
    Ignored,
}

/// Packages and unattributed directories for one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageResolution {
    pub packages: BTreeSet<PackageRecord>,
    pub unattributed: BTreeSet<String>,
}

/// Resolves storage paths to packages. Scan-scoped: memo tables die with it.
pub struct PackageResolver<'a, S: ManifestSource + ?Sized> {
    source: &'a S,
    manifest_name: &'a str,
    managed_roots: Vec<String>,
    search_roots: Vec<String>,
    boundary: Option<String>,
    manifests: HashMap<String, Option<ManifestInfo>>,
    directories: HashMap<String, ManifestLookup>,
    probes: usize,
}

impl<'a, S: ManifestSource + ?Sized> PackageResolver<'a, S> {
    /// Roots and boundary are normalized the same way as storage paths, so
    /// `./Assets` and `Assets\Sub` match what they name. Roots that normalize
    /// to nothing are dropped.
    pub fn new(source: &'a S, layout: &'a LayoutSettings, product_boundary: Option<&str>) -> Self {
        Self {
            source,
            manifest_name: &layout.manifest_name,
            managed_roots: normalized_roots(&layout.managed_roots),
            search_roots: normalized_roots(&layout.search_roots),
            boundary: product_boundary
                .map(normalize_dir)
                .filter(|b| !b.is_empty()),
            manifests: HashMap::new(),
            directories: HashMap::new(),
            probes: 0,
        }
    }

    /// Manifest reads issued so far (memo hits excluded).
    pub fn probes(&self) -> usize {
        self.probes
    }

    pub fn resolve_path(&mut self, path: &str) -> Attribution {
        let path = normalize_rel_path(path);

        if let Some(root) = self.managed_roots.iter().find(|r| is_under(&path, r)).cloned() {
            let Some(package_dir) = first_segment_under(&path, &root) else {
                return Attribution::Ignored;
            };
            let manifest = format!("{root}/{package_dir}/{}", self.manifest_name);
            return match self.read_manifest(&manifest) {
                Some(info) => match info.record() {
                    Some(record) => Attribution::Package(record),
                    None => Attribution::Nameless,
                },
                None => {
                    tracing::debug!(%manifest, "managed package has no readable manifest");
                    Attribution::Ignored
                }
            };
        }

        let Some(sentinel) = self.search_roots.iter().find(|r| is_under(&path, r)).cloned() else {
            return Attribution::Ignored;
        };
        let Some(dir) = parent(&path) else {
            return Attribution::Ignored;
        };
        match self.lookup_dir(dir, &sentinel) {
            ManifestLookup::Package(record) => Attribution::Package(record),
            ManifestLookup::Nameless => Attribution::Nameless,
            ManifestLookup::Unattributed => match &self.boundary {
                Some(boundary) if is_under(&path, boundary) => Attribution::InProduct,
                _ => Attribution::Unattributed(with_trailing_slash(dir)),
            },
        }
    }

    pub fn resolve_all<'p>(&mut self, paths: impl IntoIterator<Item = &'p str>) -> PackageResolution {
        let mut resolution = PackageResolution::default();
        for path in paths {
            match self.resolve_path(path) {
                Attribution::Package(record) => {
                    resolution.packages.insert(record);
                }
                Attribution::Unattributed(dir) => {
                    resolution.unattributed.insert(dir);
                }
                Attribution::Nameless | Attribution::InProduct | Attribution::Ignored => {}
            }
        }
        resolution
    }

    /// Search `start` and its ancestors, stopping after `sentinel`.
    ///
    /// Every directory passed through is memoised with the final answer, so
    /// sibling assets cost one map lookup.
    fn lookup_dir(&mut self, start: &str, sentinel: &str) -> ManifestLookup {
        let mut pending: Vec<String> = Vec::new();
        let mut dir = start;
        let result = loop {
            if let Some(hit) = self.directories.get(dir) {
                break hit.clone();
            }
            pending.push(dir.to_string());
            let manifest = format!("{dir}/{}", self.manifest_name);
            if let Some(info) = self.read_manifest(&manifest) {
                break match info.record() {
                    Some(record) => ManifestLookup::Package(record),
                    None => ManifestLookup::Nameless,
                };
            }
            if dir == sentinel {
                break ManifestLookup::Unattributed;
            }
            match parent(dir) {
                Some(up) => dir = up,
                None => break ManifestLookup::Unattributed,
            }
        };
        for d in pending {
            self.directories.insert(d, result.clone());
        }
        result
    }

    /// Missing, unreadable and unparseable manifests all read as `None`.
    fn read_manifest(&mut self, rel_path: &str) -> Option<ManifestInfo> {
        if let Some(cached) = self.manifests.get(rel_path) {
            return cached.clone();
        }
        self.probes += 1;
        let parsed = match self.source.read_manifest(rel_path) {
            Ok(content) => match ManifestInfo::parse(&content) {
                Ok(info) => Some(info),
                Err(err) => {
                    tracing::debug!(manifest = rel_path, %err, "skipping unparseable manifest");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::debug!(manifest = rel_path, %err, "skipping unreadable manifest");
                None
            }
        };
        self.manifests.insert(rel_path.to_string(), parsed.clone());
        parsed
    }
}

fn normalized_roots(roots: &[String]) -> Vec<String> {
    roots
        .iter()
        .map(|root| normalize_dir(root))
        .filter(|root| !root.is_empty())
        .collect()
}

/// Attribute every visited node that has a storage path.
pub fn resolve_packages<S: ManifestSource + ?Sized>(
    graph: &Graph,
    visited: &VisitedSet,
    layout: &LayoutSettings,
    product_boundary: Option<&str>,
    source: &S,
) -> PackageResolution {
    let paths: BTreeSet<&str> = visited
        .iter()
        .filter_map(|id| graph.get(id))
        .filter_map(|node| node.storage_path.as_deref())
        .collect();

    let mut resolver = PackageResolver::new(source, layout, product_boundary);
    let resolution = resolver.resolve_all(paths.iter().copied());
    tracing::debug!(
        paths = paths.len(),
        packages = resolution.packages.len(),
        unattributed = resolution.unattributed.len(),
        probes = resolver.probes(),
        "package resolution finished"
    );
    resolution
}
