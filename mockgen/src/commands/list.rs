use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mockgen_codegen::{Generator, GeneratorConfig, TemplateRenderer, TypeKind};

#[derive(Args)]
pub struct ListCommand {
    /// Path to mockgen.toml (defaults to ./mockgen.toml)
    #[arg(short, long, default_value = "mockgen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = GeneratorConfig::from_file(&self.config)?;
        let renderer = TemplateRenderer::new(&config.runtime);
        let generator = Generator::new(config, renderer);
        let units = generator.units();

        if units.is_empty() {
            println!("No types to mock");
            return Ok(());
        }

        println!("Types ({}):", units.len());
        for ty in units {
            let kind = match ty.kind {
                TypeKind::Class => "class",
                TypeKind::Protocol => "protocol",
            };
            println!("  {} ({}, {} members)", ty.name, kind, ty.members.len());
        }
        Ok(())
    }
}
