mod generate;
mod list;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

#[derive(Parser)]
#[command(name = "mockgen")]
#[command(version)]
#[command(about = "Generate mocks for declared types")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the mock file described by mockgen.toml
    Generate(GenerateCommand),

    /// List the types that would be mocked
    List(ListCommand),
}
