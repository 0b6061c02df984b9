//! Settings resolution: file first, then CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assetspec_settings::ScanSettings;

use crate::cli::ScanArgs;

pub(crate) const SETTINGS_FILE: &str = "assetspec.toml";

/// Load the settings file (explicit or discovered) and apply flag overrides.
pub(crate) fn resolve_settings(args: &ScanArgs) -> Result<ScanSettings> {
    let mut settings = match settings_path(args) {
        Some(path) => ScanSettings::from_file(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ScanSettings::default(),
    };

    if let Some(project) = &args.project {
        settings.project_root = project.display().to_string();
    }
    if let Some(product) = &args.product {
        settings.product_dir = Some(product.clone());
    }
    if let Some(tag) = &args.editor_only_tag {
        settings.editor_only_tag = tag.clone();
    }
    if args.no_product_counts {
        settings.count_product_assets = false;
    }

    settings.validate().context("Invalid settings")?;
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn settings_path(args: &ScanArgs) -> Option<PathBuf> {
    if let Some(explicit) = &args.config {
        return Some(explicit.clone());
    }
    let project = args.project.as_deref().unwrap_or(Path::new("."));
    let candidate = project.join(SETTINGS_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args() -> ScanArgs {
        ScanArgs {
            graph: PathBuf::from("g.json"),
            root: Some(0),
            scene: vec![],
            asset: None,
            project: None,
            product: None,
            config: None,
            editor_only_tag: None,
            no_product_counts: false,
            format: OutputFormat::Json,
            output: None,
        }
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "product_dir = \"Assets/FromFile\"\neditor_only_tag = \"Dev\"\n",
        )
        .unwrap();
        let mut a = args();
        a.project = Some(dir.path().to_path_buf());
        a.product = Some("Assets/FromFlag".into());

        let s = resolve_settings(&a).unwrap();

        assert_eq!(s.product_dir.as_deref(), Some("Assets/FromFlag"));
        assert_eq!(s.editor_only_tag, "Dev");
        assert_eq!(s.project_root, dir.path().display().to_string());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let mut a = args();
        a.config = Some(PathBuf::from("/no/such/assetspec.toml"));
        assert!(resolve_settings(&a).is_err());
    }

    #[test]
    fn empty_tag_flag_is_rejected() {
        let mut a = args();
        a.project = Some(tempfile::tempdir().unwrap().path().to_path_buf());
        a.editor_only_tag = Some(String::new());
        assert!(resolve_settings(&a).is_err());
    }
}
