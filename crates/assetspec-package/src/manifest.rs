//! Manifest access and parsing.

use std::collections::BTreeMap;
use std::path::PathBuf;

use assetspec_types::PackageRecord;
use serde::Deserialize;

/// Read access to manifest files by project-relative path.
pub trait ManifestSource {
    fn read_manifest(&self, rel_path: &str) -> std::io::Result<String>;
}

/// Reads manifests from a project directory on disk.
#[derive(Debug, Clone)]
pub struct FsManifestSource {
    root: PathBuf,
}

impl FsManifestSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ManifestSource for FsManifestSource {
    fn read_manifest(&self, rel_path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.root.join(rel_path))
    }
}

/// Manifests held in memory, keyed by project-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryManifestSource {
    files: BTreeMap<String, String>,
}

impl MemoryManifestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rel_path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(rel_path.into(), content.into());
        self
    }
}

impl ManifestSource for MemoryManifestSource {
    fn read_manifest(&self, rel_path: &str) -> std::io::Result<String> {
        self.files
            .get(rel_path)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }
}

/// The identity fields of a package manifest. Other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

impl ManifestInfo {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// `displayName` when non-empty, else `name`; `None` if both are empty.
    pub fn record(&self) -> Option<PackageRecord> {
        let display = self
            .display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))?;
        Some(PackageRecord::new(
            display,
            self.version.clone().unwrap_or_default(),
        ))
    }
}
