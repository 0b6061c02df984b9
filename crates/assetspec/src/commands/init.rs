use std::fs;

use anyhow::{Context, Result, bail};
use assetspec_settings::ScanSettings;

use crate::cli::InitArgs;
use crate::config::SETTINGS_FILE;

pub(crate) fn handle(args: InitArgs) -> Result<()> {
    let content = toml::to_string_pretty(&ScanSettings::default())
        .context("Failed to render default settings")?;

    if args.print {
        print!("{content}");
        return Ok(());
    }

    let path = args.dir.join(SETTINGS_FILE);
    if path.exists() && !args.force {
        bail!("{} already exists. Use --force to overwrite.", path.display());
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());
    Ok(())
}
