pub(crate) mod init;
pub(crate) mod scan;

use anyhow::Result;

use crate::cli;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    match cli.command {
        cli::Commands::Scan(args) => scan::handle(args),
        cli::Commands::Init(args) => init::handle(args),
    }
}
