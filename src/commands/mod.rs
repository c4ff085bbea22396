pub mod track;

use anyhow::Result;
use clap::Parser;

/// Command-line surface of the application.
///
/// There are no flags or subcommands; running the binary starts the
/// interactive session. Clap still provides `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    pub async fn menu() -> Result<()> {
        let _cli = Self::parse();
        track::cmd().await
    }
}
