//! # assetspec
//!
//! **CLI Binary**
//!
//! This is the entry point for the `assetspec` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Resolve settings (file plus flag overrides)
//! * Install stderr logging
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod cli;
mod commands;
mod config;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;

pub use cli::{Cli, Commands, InitArgs, OutputFormat, ScanArgs};

/// Entry point used by the `assetspec` binary.
pub fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    commands::dispatch(cli)
}

/// Render an error chain with remediation hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
