//! Errors surfaced by the scan façade.

use assetspec_graph::GraphError;
use assetspec_settings::SettingsError;
use thiserror::Error;

/// Failures that stop a scan before it starts.
///
/// Everything that can go wrong once the walk is running (unreadable
/// manifests, a missing product folder, a failing statistics collaborator)
/// is degraded into the report instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
