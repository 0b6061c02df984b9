//! Clap argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// `assetspec` lists what a prefab, scene or asset pulls in: the packages
/// it depends on, loose folders no package claims, and content counts.
///
/// Logging goes to stderr and is controlled by `ASSETSPEC_LOG`
/// (e.g. `ASSETSPEC_LOG=debug`).
#[derive(Parser, Debug)]
#[command(name = "assetspec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan a graph document and print the dependency report as JSON.
    Scan(ScanArgs),

    /// Write a default `assetspec.toml` to the project directory.
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["root", "scene", "asset"])
))]
pub struct ScanArgs {
    /// Graph document (JSON) exported from the project.
    #[arg(long, value_name = "FILE")]
    pub graph: PathBuf,

    /// Scan a prefab rooted at this node id.
    #[arg(long, value_name = "ID")]
    pub root: Option<usize>,

    /// Scan a scene made of these root node ids.
    #[arg(long, value_name = "ID", num_args = 1..)]
    pub scene: Vec<usize>,

    /// Scan every node stored at this project-relative path.
    #[arg(long, value_name = "PATH")]
    pub asset: Option<String>,

    /// Project directory that storage paths are relative to.
    ///
    /// Overrides `project_root` from the settings file.
    #[arg(long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Project-relative product folder. Assets inside it are never reported
    /// as unattributed, and its files are counted.
    #[arg(long, value_name = "DIR")]
    pub product: Option<String>,

    /// Settings file. Defaults to `<project>/assetspec.toml` when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tag that marks editor-only subtrees.
    #[arg(long, value_name = "TAG")]
    pub editor_only_tag: Option<String>,

    /// Skip counting files in the product folder.
    #[arg(long)]
    pub no_product_counts: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory (defaults to ".").
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing `assetspec.toml`.
    #[arg(long)]
    pub force: bool,

    /// Print the settings to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
}
