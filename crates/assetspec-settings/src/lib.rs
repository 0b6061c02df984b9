//! # assetspec-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for a scan. These mirror the CLI flags without
//! any Clap dependency so library hosts can build them directly or load them
//! from a TOML file.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Storage layout (where manifests live, which roots are managed)
//! * Default values and TOML loading
//!
//! ## What does NOT belong here
//! * Clap parsing (use the `assetspec` binary crate)
//! * Filesystem probing beyond reading the settings file
//! * Business logic

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Where packages and their manifests live inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Roots whose first-level directories are each exactly one package.
    /// No upward search happens below these.
    #[serde(default = "default_managed_roots")]
    pub managed_roots: Vec<String>,

    /// Roots searched upward for a manifest; each root is its own sentinel.
    #[serde(default = "default_search_roots")]
    pub search_roots: Vec<String>,

    /// Manifest file name looked for in each directory.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,
}

fn default_managed_roots() -> Vec<String> {
    vec!["Packages".to_string()]
}

fn default_search_roots() -> Vec<String> {
    vec!["Assets".to_string()]
}

fn default_manifest_name() -> String {
    "package.json".to_string()
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            managed_roots: default_managed_roots(),
            search_roots: default_search_roots(),
            manifest_name: default_manifest_name(),
        }
    }
}

/// Settings for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Directory on disk that storage paths are relative to.
    #[serde(default = "default_project_root")]
    pub project_root: String,

    /// Project-relative directory holding the product being described.
    /// Assets below it are never reported as unattributed.
    #[serde(default)]
    pub product_dir: Option<String>,

    /// Tag marking a node and its subtree as editor-only.
    #[serde(default = "default_editor_only_tag")]
    pub editor_only_tag: String,

    /// Count assets shipped inside `product_dir` on disk.
    #[serde(default = "default_count_product_assets")]
    pub count_product_assets: bool,

    #[serde(default)]
    pub layout: LayoutSettings,
}

fn default_project_root() -> String {
    ".".to_string()
}

fn default_editor_only_tag() -> String {
    "EditorOnly".to_string()
}

fn default_count_product_assets() -> bool {
    true
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            product_dir: None,
            editor_only_tag: default_editor_only_tag(),
            count_product_assets: default_count_product_assets(),
            layout: LayoutSettings::default(),
        }
    }
}

impl ScanSettings {
    /// Settings for a project rooted at `root` with defaults elsewhere.
    pub fn for_project(root: impl Into<String>) -> Self {
        Self {
            project_root: root.into(),
            ..Default::default()
        }
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject settings that would make resolution meaningless.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.layout.manifest_name.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "layout.manifest_name must not be empty".to_string(),
            ));
        }
        if self.layout.manifest_name.contains('/') || self.layout.manifest_name.contains('\\') {
            return Err(SettingsError::Invalid(format!(
                "layout.manifest_name must be a bare file name, got {:?}",
                self.layout.manifest_name
            )));
        }
        if self.editor_only_tag.is_empty() {
            return Err(SettingsError::Invalid(
                "editor_only_tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_default_matches_project_conventions() {
        let layout = LayoutSettings::default();
        assert_eq!(layout.managed_roots, vec!["Packages"]);
        assert_eq!(layout.search_roots, vec!["Assets"]);
        assert_eq!(layout.manifest_name, "package.json");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let s = ScanSettings::from_toml("").unwrap();
        assert_eq!(s, ScanSettings::default());
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let s = ScanSettings::from_toml("[layout]\nmanifest_name = \"pkg.json\"\n").unwrap();
        assert_eq!(s.layout.manifest_name, "pkg.json");
        assert_eq!(s.layout.search_roots, vec!["Assets"]);
    }

    #[test]
    fn manifest_name_with_separator_is_rejected() {
        let err = ScanSettings::from_toml("[layout]\nmanifest_name = \"a/b.json\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn serde_json_roundtrip() {
        let s = ScanSettings {
            product_dir: Some("Assets/Product".into()),
            ..ScanSettings::for_project("/tmp/project")
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: ScanSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
